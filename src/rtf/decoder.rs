//! Decoding of hex image records into in-memory files

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use log::debug;

use super::errors::{PasteError, PasteResult};
use super::types::EmbeddedImageRecord;
use crate::clipboard::ImageMime;
use crate::utils::hex_utils::validate_hex;

/// Base name given to every recovered image
pub const IMAGE_BASE_NAME: &str = "image";

/// An image file recovered from the clipboard, ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImageFile {
    bytes: Vec<u8>,
    mime_type: ImageMime,
    file_name: String,
    last_modified: SystemTime,
}

impl DecodedImageFile {
    /// Wrap raw image bytes, stamping them with the current time
    pub fn new(bytes: Vec<u8>, mime_type: ImageMime) -> Self {
        DecodedImageFile {
            bytes,
            mime_type,
            file_name: format!("{}{}", IMAGE_BASE_NAME, mime_type.extension()),
            last_modified: SystemTime::now(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn mime_type(&self) -> ImageMime {
        self.mime_type
    }

    /// `image.png` or `image.jpg`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Time the file was decoded
    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }

    /// Decode time as milliseconds since the Unix epoch
    pub fn last_modified_millis(&self) -> u64 {
        self.last_modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Format detected from the leading magic bytes, if PNG or JPEG
    pub fn sniffed_mime(&self) -> Option<ImageMime> {
        image::guess_format(&self.bytes)
            .ok()
            .and_then(ImageMime::from_image_format)
    }

    /// Read the pixel dimensions from the image header
    ///
    /// # Returns
    /// (width, height) or an error if the bytes are not a readable image
    pub fn dimensions(&self) -> PasteResult<(u32, u32)> {
        let reader = image::ImageReader::new(Cursor::new(self.bytes.as_slice()))
            .with_guessed_format()?;
        reader.into_dimensions()
            .map_err(|e| PasteError::GenericError(format!("Cannot read image dimensions: {}", e)))
    }

    /// Write the file into a directory under the given name
    ///
    /// # Arguments
    /// * `dir` - Target directory, created if missing
    /// * `name` - File name to use instead of the synthesized one
    ///
    /// # Returns
    /// Path of the written file
    pub fn save_to(&self, dir: &Path, name: Option<&str>) -> PasteResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(name.unwrap_or(&self.file_name));
        fs::write(&path, &self.bytes)?;
        debug!("Wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(path)
    }
}

/// Decode a hex image record into an in-memory file
///
/// The hex string must be non-empty, of even length and contain only
/// hex digits; anything else is rejected rather than decoded partially.
///
/// # Arguments
/// * `record` - Record produced by `extract_images`
///
/// # Returns
/// The decoded file, or `MalformedHexPayload`
pub fn decode_image_record(record: &EmbeddedImageRecord) -> PasteResult<DecodedImageFile> {
    validate_hex(&record.hex_data)?;

    let bytes = hex::decode(&record.hex_data)
        .map_err(|e| PasteError::MalformedHexPayload(e.to_string()))?;
    debug!("Decoded {} {} bytes", bytes.len(), record.mime_type);

    Ok(DecodedImageFile::new(bytes, record.mime_type))
}
