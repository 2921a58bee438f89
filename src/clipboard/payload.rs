//! Clipboard payload model
//!
//! A paste event carries several text flavors of the same content
//! (plain text, HTML, RTF) plus, for copied files, a list of items.

use std::collections::HashMap;
use super::mime::{self, TEXT_HTML, TEXT_PLAIN, TEXT_RTF};

/// One file item attached to a paste event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem {
    /// Item type as reported by the host, e.g. `image/png`
    pub mime: String,
    /// Raw item bytes
    pub data: Vec<u8>,
}

impl ClipboardItem {
    pub fn new(mime: &str, data: Vec<u8>) -> Self {
        ClipboardItem {
            mime: mime.to_string(),
            data,
        }
    }

    /// Whether the host labelled this item as an image
    pub fn is_image(&self) -> bool {
        mime::is_image_type(&self.mime)
    }
}

/// Contents of the clipboard for a single paste event
#[derive(Debug, Clone, Default)]
pub struct ClipboardPayload {
    flavors: HashMap<String, String>,
    items: Vec<ClipboardItem>,
}

impl ClipboardPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper that sets a text flavor
    pub fn with_data(mut self, flavor: &str, data: &str) -> Self {
        self.set_data(flavor, data);
        self
    }

    /// Builder-style helper that appends a file item
    pub fn with_item(mut self, item: ClipboardItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn set_data(&mut self, flavor: &str, data: &str) {
        self.flavors.insert(flavor.to_ascii_lowercase(), data.to_string());
    }

    /// Text stored under a flavor; empty strings count as absent
    pub fn get_data(&self, flavor: &str) -> Option<&str> {
        self.flavors
            .get(&flavor.to_ascii_lowercase())
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn plain_text(&self) -> Option<&str> {
        self.get_data(TEXT_PLAIN)
    }

    pub fn html(&self) -> Option<&str> {
        self.get_data(TEXT_HTML)
    }

    pub fn rtf(&self) -> Option<&str> {
        self.get_data(TEXT_RTF)
    }

    pub fn items(&self) -> &[ClipboardItem] {
        &self.items
    }
}
