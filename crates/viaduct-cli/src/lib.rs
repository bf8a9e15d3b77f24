//! CLI logic for the viaduct import tool.
//!
//! This module contains the core CLI logic for the viaduct import tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use viaduct::{MapSession, ViaductError};

/// Run the viaduct CLI application
///
/// This function imports the input line save into a fresh diagram and
/// writes the resulting document to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ViaductError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Save parsing errors
/// - Import errors
pub fn run(args: &Args) -> Result<(), ViaductError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Importing line save"
    );

    // Load configuration
    let cli_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Import using the MapSession API
    let mut session = MapSession::new();
    session.import_line_save(&source)?;

    // Write output file
    let document = if args.pretty || cli_config.output().pretty() {
        session.to_json_pretty()?
    } else {
        session.to_json()?
    };
    fs::write(&args.output, document)?;

    info!(output_file = args.output; "Document exported successfully");

    Ok(())
}
