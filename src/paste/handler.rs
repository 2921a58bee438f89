//! Paste handler
//!
//! Turns a clipboard payload into what the editor inserts: escaped text,
//! filtered HTML with the Word images recovered from the RTF flavor, or
//! pasted image files.

use log::{debug, warn};

use crate::clipboard::{ClipboardItem, ClipboardPayload};
use crate::html::options::PasteOptions;
use crate::html::sanitizer::{filter_markup, find_word_image_tags, raw_paste_html, strip_style_attributes, WordImageTag};
use crate::html::text::get_paste_text;
use crate::rtf::decoder::{decode_image_record, DecodedImageFile};
use crate::rtf::picture::extract_images;

/// A Word image recovered from RTF, paired with the tag it belongs to
#[derive(Debug, Clone)]
pub struct WordImage {
    /// `src` of the `<img>` tag in the pasted HTML, usually a local temp path
    pub original_src: String,
    /// Image bytes taken from the RTF flavor
    pub file: DecodedImageFile,
}

/// Filtered HTML of a paste together with its recoverable Word images
#[derive(Debug, Clone)]
pub struct PastedHtml {
    pub html: String,
    pub word_images: Vec<WordImage>,
}

/// Processes paste payloads with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct PasteHandler {
    options: PasteOptions,
}

impl PasteHandler {
    pub fn new(options: PasteOptions) -> Self {
        PasteHandler { options }
    }

    pub fn options(&self) -> &PasteOptions {
        &self.options
    }

    /// Plain text of the paste, escaped for insertion as HTML
    pub fn paste_text(&self, payload: &ClipboardPayload) -> String {
        get_paste_text(payload)
    }

    /// Filtered HTML of the paste
    ///
    /// When images are kept and the HTML contains Word image tags, the
    /// images in the RTF flavor are decoded and paired with those tags by
    /// position.
    ///
    /// # Returns
    /// `None` if the clipboard holds neither HTML nor plain text
    pub fn paste_html(&self, payload: &ClipboardPayload) -> Option<PastedHtml> {
        let raw = raw_paste_html(payload)?;
        let html = filter_markup(&raw, &self.options);

        let word_images = if self.options.ignore_img {
            Vec::new()
        } else {
            let tags = find_word_image_tags(&html);
            if tags.is_empty() {
                Vec::new()
            } else {
                pair_word_images(&tags, payload.rtf())
            }
        };

        Some(PastedHtml {
            html: strip_style_attributes(&html, self.options.filter_style),
            word_images,
        })
    }

    /// Image files attached to the paste
    ///
    /// Empty when the paste also carries text, since the editor then
    /// inserts the text instead.
    pub fn paste_images(&self, payload: &ClipboardPayload) -> Vec<ClipboardItem> {
        if !self.paste_text(payload).is_empty() {
            return Vec::new();
        }

        payload.items()
            .iter()
            .filter(|item| item.is_image())
            .cloned()
            .collect()
    }
}

/// Decode the RTF images and pair them with Word image tags in order
///
/// Images that fail to decode are dropped without shifting the pairing of
/// the ones after them.
pub fn pair_word_images(tags: &[WordImageTag], rtf: Option<&str>) -> Vec<WordImage> {
    let records = extract_images(rtf);
    if records.len() != tags.len() {
        warn!("Found {} Word image tag(s) but {} RTF image(s)", tags.len(), records.len());
    }

    tags.iter()
        .zip(records.iter())
        .filter_map(|(tag, record)| match decode_image_record(record) {
            Ok(file) => {
                debug!("Paired {} with a {} byte {}", tag.src, file.len(), file.mime_type());
                Some(WordImage {
                    original_src: tag.src.clone(),
                    file,
                })
            }
            Err(e) => {
                warn!("Skipping image for {}: {}", tag.src, e);
                None
            }
        })
        .collect()
}
