use std::fs;
use std::path::Path;

use wt_tracker::{Reply, Session};

pub fn run(file: &Path) -> Result<(), String> {
    let script = fs::read_to_string(file)
        .map_err(|e| format!("failed to read {}: {e}", file.display()))?;

    let mut session = Session::new();
    for line in script.lines() {
        match session.process(line) {
            Reply::Output(text) => println!("{text}"),
            Reply::Exit => break,
        }
    }

    Ok(())
}
