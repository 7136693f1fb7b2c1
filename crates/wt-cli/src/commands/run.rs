use std::io::{self, BufRead, Write};

use colored::Colorize;

use wt_tracker::{Reply, Session};

pub fn run() -> Result<(), String> {
    let mut session = Session::new();

    println!("  {} Witcher tracking session", "Starting".bold());
    println!("  Type 'Exit' to end the session.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!(">> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match session.process(&line) {
            Reply::Output(text) => println!("{text}"),
            Reply::Exit => break,
        }
    }

    Ok(())
}
