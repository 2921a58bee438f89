use log::info;
use crate::clipboard::{ClipboardItem, ClipboardPayload};
use crate::html::options::PasteOptions;
use crate::paste::handler::{PasteHandler, PastedHtml};
use crate::paste::upload::ImageUploader;
use crate::rtf::decoder::{decode_image_record, DecodedImageFile};
use crate::rtf::errors::PasteResult;
use crate::rtf::picture::{extract_images, scan_picture_groups};
use crate::rtf::types::EmbeddedImageRecord;

/// Main interface to the PasteKit library
#[derive(Debug, Clone, Default)]
pub struct PasteKit {
    handler: PasteHandler,
}

impl PasteKit {
    /// Create a new PasteKit instance
    ///
    /// # Arguments
    /// * `options` - Style and image filtering switches
    pub fn new(options: PasteOptions) -> Self {
        PasteKit {
            handler: PasteHandler::new(options),
        }
    }

    /// Create a PasteKit instance with options read from a TOML file
    ///
    /// # Arguments
    /// * `config_path` - Path to a file with a `[paste]` table
    ///
    /// # Returns
    /// A PasteKit instance or an error if the file cannot be read or parsed
    pub fn from_config(config_path: &str) -> PasteResult<Self> {
        let options = PasteOptions::from_file(config_path)?;
        info!("Using paste options from {}: {:?}", config_path, options);
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &PasteOptions {
        self.handler.options()
    }

    /// Summarize the picture groups of an RTF payload
    ///
    /// # Arguments
    /// * `rtf` - RTF text of the clipboard
    ///
    /// # Returns
    /// Human-readable report, one line per picture group
    pub fn analyze_rtf(&self, rtf: &str) -> String {
        let groups = scan_picture_groups(rtf);

        let mut result = "RTF Analysis Results:\n".to_string();
        result.push_str(&format!("  Picture groups: {}\n", groups.len()));
        for (i, group) in groups.iter().enumerate() {
            result.push_str(&format!("  #{} offset {}: {}, {} bytes\n",
                                     i, group.offset, group.kind, group.byte_len()));
        }

        result
    }

    /// Find the PNG and JPEG images embedded in an RTF payload
    pub fn extract_images(&self, rtf: Option<&str>) -> Vec<EmbeddedImageRecord> {
        extract_images(rtf)
    }

    /// Extract and decode every image of an RTF payload
    ///
    /// Each entry is the decode result of the image at that position, so
    /// failures do not shift the images after them.
    pub fn decode_images(&self, rtf: Option<&str>) -> Vec<PasteResult<DecodedImageFile>> {
        extract_images(rtf)
            .iter()
            .map(decode_image_record)
            .collect()
    }

    /// Plain text of a paste, escaped for insertion as HTML
    pub fn paste_text(&self, payload: &ClipboardPayload) -> String {
        self.handler.paste_text(payload)
    }

    /// Filtered HTML of a paste with its recoverable Word images
    pub fn paste_html(&self, payload: &ClipboardPayload) -> Option<PastedHtml> {
        self.handler.paste_html(payload)
    }

    /// Image files of a paste that carries no text
    pub fn paste_images(&self, payload: &ClipboardPayload) -> Vec<ClipboardItem> {
        self.handler.paste_images(payload)
    }

    /// Filter pasted HTML and re-host its Word images through an uploader
    ///
    /// # Arguments
    /// * `payload` - Clipboard contents of the paste
    /// * `uploader` - Editor-provided upload collaborator
    ///
    /// # Returns
    /// The HTML to insert, or `None` if there is nothing to paste
    pub fn process_paste(&self, payload: &ClipboardPayload, uploader: &dyn ImageUploader) -> Option<String> {
        let mut pasted = self.handler.paste_html(payload)?;
        let uploaded = pasted.upload_word_images(uploader);
        if !pasted.word_images.is_empty() {
            info!("Uploaded {} of {} Word image(s)", uploaded, pasted.word_images.len());
        }
        Some(pasted.html)
    }
}
