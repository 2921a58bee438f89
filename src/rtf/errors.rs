//! Custom error types for paste processing

use std::fmt;
use std::io;

/// Paste-processing error types
#[derive(Debug)]
pub enum PasteError {
    /// I/O error
    IoError(io::Error),
    /// Hex payload of an embedded image is empty, odd-length or not hex
    MalformedHexPayload(String),
    /// Image format other than PNG or JPEG
    UnsupportedImageFormat(String),
    /// Invalid configuration file or value
    ConfigError(String),
    /// Upload collaborator rejected a file
    UploadError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for PasteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasteError::IoError(e) => write!(f, "I/O error: {}", e),
            PasteError::MalformedHexPayload(msg) => write!(f, "Malformed hex payload: {}", msg),
            PasteError::UnsupportedImageFormat(mime) => write!(f, "Unsupported image format: {}", mime),
            PasteError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PasteError::UploadError(msg) => write!(f, "Upload failed: {}", msg),
            PasteError::GenericError(msg) => write!(f, "Paste error: {}", msg),
        }
    }
}

impl std::error::Error for PasteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PasteError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PasteError {
    fn from(error: io::Error) -> Self {
        PasteError::IoError(error)
    }
}

/// Result type for paste operations
pub type PasteResult<T> = Result<T, PasteError>;

impl From<String> for PasteError {
    fn from(msg: String) -> Self {
        PasteError::GenericError(msg)
    }
}
