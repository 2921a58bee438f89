//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod extract_command;
pub mod sanitize_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use extract_command::ExtractCommand;
pub use sanitize_command::SanitizeCommand;

use std::fs;
use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::rtf::errors::{PasteError, PasteResult};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
#[derive(Default)]
pub struct PasteKitCommandFactory;

impl PasteKitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PasteKitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for PasteKitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> PasteResult<Box<dyn Command + 'a>> {
        if args.get_flag("extract") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else if args.get_flag("sanitize") {
            Ok(Box::new(SanitizeCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}

/// Read the required positional input argument
pub(crate) fn input_path(args: &ArgMatches) -> PasteResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| PasteError::GenericError("Missing input file".to_string()))
}

/// Read a clipboard dump from disk
///
/// Dumps saved from a browser are not always valid UTF-8, so invalid
/// sequences are replaced rather than rejected.
pub(crate) fn read_dump(path: &str) -> PasteResult<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
