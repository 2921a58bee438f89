//! MIME types for clipboard flavors and embedded images

use std::fmt;
use std::str::FromStr;
use crate::rtf::errors::{PasteError, PasteResult};

/// Plain text clipboard flavor
pub const TEXT_PLAIN: &str = "text/plain";
/// HTML clipboard flavor
pub const TEXT_HTML: &str = "text/html";
/// RTF clipboard flavor, as exposed by browsers for Word copies
pub const TEXT_RTF: &str = "text/rtf";

/// Raster image types that can be recovered from an RTF picture group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageMime {
    Png,
    Jpeg,
}

impl ImageMime {
    /// MIME string, e.g. `image/png`
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Png => "image/png",
            ImageMime::Jpeg => "image/jpeg",
        }
    }

    /// File extension including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageMime::Png => ".png",
            ImageMime::Jpeg => ".jpg",
        }
    }

    /// Parse a MIME string
    ///
    /// # Returns
    /// The matching image type, or `UnsupportedImageFormat`
    pub fn from_mime_str(mime: &str) -> PasteResult<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Ok(ImageMime::Png),
            "image/jpeg" => Ok(ImageMime::Jpeg),
            _ => Err(PasteError::UnsupportedImageFormat(mime.to_string())),
        }
    }

    /// Convert the format detected by the `image` crate
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(ImageMime::Png),
            image::ImageFormat::Jpeg => Some(ImageMime::Jpeg),
            _ => None,
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImageMime {
    type Err = PasteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageMime::from_mime_str(s)
    }
}

/// Whether a clipboard item type denotes an image, matched loosely on `image`
pub fn is_image_type(mime: &str) -> bool {
    mime.to_ascii_lowercase().contains("image")
}
