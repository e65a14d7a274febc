//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Keystroke log text reconstruction.
///
/// Replays a raw keystroke log into text and reports the most common word,
/// URLs, emails and password-like strings found in it.
#[derive(Debug, Parser)]
#[command(name = "kt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keystroke log to read (default: raw_log.txt).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Report file to write (default: extracted_words.txt).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the analysis as JSON to stdout.
    #[arg(long)]
    pub json: bool,
}
