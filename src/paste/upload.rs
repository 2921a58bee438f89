//! Seam to the editor's image upload collaborator

use log::{info, warn};

use super::handler::PastedHtml;
use crate::rtf::decoder::DecodedImageFile;
use crate::rtf::errors::PasteResult;

/// Uploads an image file and returns the URL it can be served from
///
/// Implemented by the host editor; this crate never talks to the network.
pub trait ImageUploader {
    fn upload(&self, file: &DecodedImageFile) -> PasteResult<String>;
}

/// Point every reference to `original_src` at `url`
pub fn replace_image_src(html: &str, original_src: &str, url: &str) -> String {
    if original_src.is_empty() {
        return html.to_string();
    }
    html.replace(original_src, url)
}

impl PastedHtml {
    /// Upload the recovered Word images and rewrite their `src` attributes
    ///
    /// Images whose upload fails keep their original (local) `src`.
    ///
    /// # Returns
    /// Number of images that were uploaded and replaced
    pub fn upload_word_images(&mut self, uploader: &dyn ImageUploader) -> usize {
        let mut replaced = 0;

        for image in &self.word_images {
            match uploader.upload(&image.file) {
                Ok(url) => {
                    info!("Uploaded {} ({} bytes) to {}", image.file.file_name(), image.file.len(), url);
                    self.html = replace_image_src(&self.html, &image.original_src, &url);
                    replaced += 1;
                }
                Err(e) => warn!("Upload of {} failed: {}", image.original_src, e),
            }
        }

        replaced
    }
}
