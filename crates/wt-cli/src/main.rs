//! CLI frontend for the Witcher tracker.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wt",
    about = "Witcher tracker — inventory, bestiary, and alchemy bookkeeping for Geralt",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive tracking session
    Run,

    /// Execute a script of commands, one per line
    Exec {
        /// File containing one command per line
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => commands::run::run(),
        Commands::Exec { file } => commands::exec::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
