//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Root directory to scan for .py files
    pub root: PathBuf,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep files with zero string literals as empty lists
    /// (default is to omit them)
    #[arg(long)]
    pub include_empty: bool,

    /// Enable verbose output (per-file skip warnings and a run summary
    /// on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
