//! Hex string helpers

use crate::rtf::errors::{PasteError, PasteResult};

/// Keep only ASCII hex digits, dropping the line wraps and spaces RTF
/// inserts into hex data
pub fn strip_non_hex(text: &str) -> String {
    text.chars().filter(char::is_ascii_hexdigit).collect()
}

/// Check that a string is a non-empty, even-length run of hex digits
pub fn validate_hex(hex: &str) -> PasteResult<()> {
    if hex.is_empty() {
        return Err(PasteError::MalformedHexPayload("empty payload".to_string()));
    }

    if let Some((index, c)) = hex.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(PasteError::MalformedHexPayload(
            format!("invalid character {:?} at position {}", c, index)));
    }

    if hex.len() % 2 != 0 {
        return Err(PasteError::MalformedHexPayload(
            format!("odd number of digits ({})", hex.len())));
    }

    Ok(())
}

/// Lowercase hex encoding of a byte buffer
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
