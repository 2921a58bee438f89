//! Values produced by scanning RTF picture groups

use std::fmt;
use crate::clipboard::ImageMime;

/// Image kind declared by the blip control word of a picture group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlipKind {
    Png,
    Jpeg,
    /// Anything else, carrying a short label such as `EMF` or `unknown`
    Unsupported(String),
}

impl BlipKind {
    /// Image type for supported kinds
    pub fn mime(&self) -> Option<ImageMime> {
        match self {
            BlipKind::Png => Some(ImageMime::Png),
            BlipKind::Jpeg => Some(ImageMime::Jpeg),
            BlipKind::Unsupported(_) => None,
        }
    }
}

impl fmt::Display for BlipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlipKind::Png => write!(f, "PNG"),
            BlipKind::Jpeg => write!(f, "JPEG"),
            BlipKind::Unsupported(label) => write!(f, "{} (unsupported)", label),
        }
    }
}

/// A picture group matched in an RTF payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureGroup {
    /// Byte offset of the opening `{\pict` in the payload
    pub offset: usize,
    /// Declared image kind
    pub kind: BlipKind,
    /// Value of `\bliptag`, when it fits an i64
    pub blip_tag: Option<i64>,
    /// Hex digits of the image body, whitespace removed
    pub hex_data: String,
}

impl PictureGroup {
    /// Number of bytes the hex body would decode to
    pub fn byte_len(&self) -> usize {
        self.hex_data.len() / 2
    }

    /// Convert to an image record, if the kind is supported
    pub fn to_record(&self) -> Option<EmbeddedImageRecord> {
        self.kind.mime().map(|mime_type| EmbeddedImageRecord {
            hex_data: self.hex_data.clone(),
            mime_type,
        })
    }
}

/// Hex-encoded image found in an RTF payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImageRecord {
    /// Contiguous hex digits of the image file
    pub hex_data: String,
    /// PNG or JPEG
    pub mime_type: ImageMime,
}

impl EmbeddedImageRecord {
    pub fn new(hex_data: &str, mime_type: ImageMime) -> Self {
        EmbeddedImageRecord {
            hex_data: hex_data.to_string(),
            mime_type,
        }
    }
}
