//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use emotone_core::RecipientCategory;

/// Turn a plain Korean message into tone-matched, emoji-decorated variants.
#[derive(Debug, Parser)]
#[command(name = "emotone", version, about, long_about = None)]
pub struct Cli {
    /// Message to rewrite. Reads lines from stdin when omitted.
    pub message: Option<String>,

    /// Who the message is for (boss, colleague, friend).
    #[arg(short = 't', long = "to")]
    pub recipient: Option<RecipientCategory>,

    /// Copy the n-th suggestion to the clipboard.
    #[arg(long, value_name = "N", value_parser = parse_index)]
    pub copy: Option<usize>,

    /// Print suggestions as JSON.
    #[arg(long)]
    pub json: bool,

    /// Skip the response delay.
    #[arg(long)]
    pub no_delay: bool,

    /// Store the chosen recipient as the default.
    #[arg(long, requires = "recipient")]
    pub set_default: bool,

    /// Settings file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Parses a 1-based suggestion number.
fn parse_index(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a number starting at 1, got '{s}'")),
    }
}
