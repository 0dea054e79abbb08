use clap::Parser;
use std::path::PathBuf;

/// Interactive book catalogue shell
///
/// Examples:
///   # Start with an empty library
///   bibman
///
///   # Load a catalogue before the first prompt
///   bibman data/books.json
///
///   # Run commands without entering the prompt
///   bibman data/books.json -c "GROUP TITLE" -c "SEARCH dune"
#[derive(Parser, Debug)]
#[command(name = "bibman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a book catalogue JSON file loaded at startup
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Execute a command line and exit (can be given multiple times)
    #[arg(short, long = "command", value_name = "COMMAND")]
    pub commands: Vec<String>,
}
