//! Image extraction command
//!
//! This module implements the command for writing the PNG and JPEG
//! images embedded in an RTF clipboard dump to a directory.

use std::path::PathBuf;
use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::commands::{input_path, read_dump};
use crate::rtf::errors::{PasteError, PasteResult};
use crate::rtf::picture::extract_images;
use crate::rtf::decoder::decode_image_record;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for extracting images from an RTF dump
pub struct ExtractCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Directory receiving the images
    output_dir: PathBuf,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PasteResult<Self> {
        let input_file = input_path(args)?;

        let output_dir = args.get_one::<String>("output")
            .map(PathBuf::from)
            .ok_or_else(|| PasteError::GenericError("Missing output directory for extraction".to_string()))?;
        info!("Output directory: {}", output_dir.display());

        Ok(ExtractCommand {
            input_file,
            output_dir,
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> PasteResult<()> {
        let rtf = read_dump(&self.input_file)?;
        let records = extract_images(Some(&rtf));
        info!("Found {} extractable image(s) in {}", records.len(), self.input_file);

        if records.is_empty() {
            return Ok(());
        }

        let progress = ProgressTracker::new(records.len() as u64, "Decoding images");
        let mut written = 0;

        for (index, record) in records.iter().enumerate() {
            match decode_image_record(record) {
                Ok(file) => {
                    let name = format!("image-{}{}", index + 1, file.mime_type().extension());
                    let path = file.save_to(&self.output_dir, Some(name.as_str()))?;
                    self.logger.log(&format!("{} -> {} ({} bytes)", index + 1, path.display(), file.len()))?;
                    written += 1;
                }
                Err(e) => warn!("Skipping image #{}: {}", index + 1, e),
            }
            progress.increment(1);
        }

        progress.finish();
        info!("Wrote {} of {} image(s) to {}", written, records.len(), self.output_dir.display());
        Ok(())
    }
}
