//! RTF picture analysis command
//!
//! This module implements the command for listing the picture groups
//! found in a saved RTF clipboard dump.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::{input_path, read_dump};
use crate::rtf::errors::PasteResult;
use crate::rtf::picture::scan_picture_groups;
use crate::rtf::decoder::decode_image_record;
use crate::rtf::types::PictureGroup;
use crate::utils::logger::Logger;

/// Command for analyzing the pictures of an RTF dump
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PasteResult<Self> {
        let input_file = input_path(args)?;
        let verbose = args.get_flag("verbose");

        Ok(AnalyzeCommand {
            input_file,
            verbose,
            logger,
        })
    }

    /// Display details of one picture group
    ///
    /// In verbose mode supported images are decoded to report their
    /// pixel dimensions.
    fn display_group(&self, index: usize, group: &PictureGroup) {
        info!("\nPicture #{} (offset: {})", index, group.offset);
        info!("  Kind: {}", group.kind);
        info!("  Size: {} bytes", group.byte_len());

        if !self.verbose {
            return;
        }

        if let Some(record) = group.to_record() {
            match decode_image_record(&record).and_then(|file| file.dimensions()) {
                Ok((width, height)) => info!("  Dimensions: {}x{}", width, height),
                Err(e) => info!("  Not decodable: {}", e),
            }
        }
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> PasteResult<()> {
        debug!("Analyzing RTF file: {}", self.input_file);
        let rtf = read_dump(&self.input_file)?;
        let groups = scan_picture_groups(&rtf);

        let supported = groups.iter().filter(|g| g.kind.mime().is_some()).count();
        info!("RTF Analysis Results:");
        info!("  Size: {} bytes", rtf.len());
        info!("  Picture groups: {} ({} extractable)", groups.len(), supported);

        for (index, group) in groups.iter().enumerate() {
            self.display_group(index, group);
        }

        self.logger.print_picture_groups(&groups)?;
        Ok(())
    }
}
