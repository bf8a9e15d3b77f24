//! Command-line argument definitions for the viaduct CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, output formatting, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the viaduct import tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input line-save JSON file
    #[arg(help = "Path to the input line-save file")]
    pub input: String,

    /// Path to the output diagram document
    #[arg(short, long, default_value = "map.json")]
    pub output: String,

    /// Pretty-print the output document
    #[arg(long)]
    pub pretty: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
