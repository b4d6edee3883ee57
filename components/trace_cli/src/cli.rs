//! Command line arguments

use clap::Parser;

/// Formats a captured error snapshot as a V8-style stack trace.
#[derive(Debug, Parser)]
#[command(name = "corten-trace", version, about)]
pub struct Cli {
    /// Error snapshot (JSON) to format
    #[arg(short, long)]
    pub file: Option<String>,

    /// Inline error snapshot (JSON)
    #[arg(short, long, conflicts_with = "file")]
    pub eval: Option<String>,

    /// Source map table (JSON) used to remap positions
    #[arg(short = 'm', long)]
    pub source_map: Option<String>,

    /// Print the stack and resolved call sites as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging for the stack trace engine
    #[arg(short, long)]
    pub verbose: bool,
}
