//! HTML sanitize command
//!
//! This module implements the command that replays a saved paste: it
//! filters an HTML dump the way the editor would and reports the Word
//! images that could be recovered from a companion RTF dump.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::clipboard::{ClipboardPayload, TEXT_HTML, TEXT_PLAIN, TEXT_RTF};
use crate::commands::command_traits::Command;
use crate::commands::{input_path, read_dump};
use crate::html::options::PasteOptions;
use crate::paste::handler::PasteHandler;
use crate::rtf::errors::PasteResult;
use crate::utils::logger::Logger;

/// Command for sanitizing pasted HTML
pub struct SanitizeCommand<'a> {
    /// Path to the HTML dump
    input_file: String,
    /// Path to the RTF dump of the same paste
    rtf_file: Option<String>,
    /// Path to the plain-text dump of the same paste
    text_file: Option<String>,
    /// Directory for recovered Word images
    output_dir: Option<PathBuf>,
    /// Filtering options after config file and flags are applied
    options: PasteOptions,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SanitizeCommand<'a> {
    /// Create a new sanitize command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new SanitizeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PasteResult<Self> {
        let input_file = input_path(args)?;

        let mut options = match args.get_one::<String>("config") {
            Some(path) => {
                info!("Loading paste options from {}", path);
                PasteOptions::from_file(path)?
            },
            None => PasteOptions::default(),
        };

        // Flags override the config file
        if args.get_flag("keep-style") {
            options.filter_style = false;
        }
        if args.get_flag("ignore-img") {
            options.ignore_img = true;
        }

        Ok(SanitizeCommand {
            input_file,
            rtf_file: args.get_one::<String>("rtf").cloned(),
            text_file: args.get_one::<String>("text").cloned(),
            output_dir: args.get_one::<String>("output").map(PathBuf::from),
            options,
            logger,
        })
    }

    /// Assemble the clipboard payload from the dump files
    fn load_payload(&self) -> PasteResult<ClipboardPayload> {
        let mut payload = ClipboardPayload::new().with_data(TEXT_HTML, &read_dump(&self.input_file)?);

        if let Some(path) = &self.rtf_file {
            payload.set_data(TEXT_RTF, &read_dump(path)?);
        }
        if let Some(path) = &self.text_file {
            payload.set_data(TEXT_PLAIN, &read_dump(path)?);
        }

        Ok(payload)
    }
}

impl<'a> Command for SanitizeCommand<'a> {
    fn execute(&self) -> PasteResult<()> {
        let payload = self.load_payload()?;
        let handler = PasteHandler::new(self.options);

        let pasted = match handler.paste_html(&payload) {
            Some(pasted) => pasted,
            None => {
                info!("Nothing to paste");
                return Ok(());
            }
        };

        info!("Recovered {} Word image(s)", pasted.word_images.len());
        for (index, image) in pasted.word_images.iter().enumerate() {
            info!("  {} -> {} ({} bytes)", image.original_src, image.file.file_name(), image.file.len());

            if let Some(dir) = &self.output_dir {
                let name = format!("image-{}{}", index + 1, image.file.mime_type().extension());
                let path = image.file.save_to(dir, Some(name.as_str()))?;
                self.logger.log(&format!("{} saved as {}", image.original_src, path.display()))?;
            }
        }

        println!("{}", pasted.html);
        Ok(())
    }
}
