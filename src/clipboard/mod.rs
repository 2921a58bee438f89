//! Clipboard data model
//!
//! Types describing what a paste event hands over: text flavors,
//! file items and the image MIME types this crate understands.

pub mod mime;
pub mod payload;

pub use mime::{ImageMime, TEXT_HTML, TEXT_PLAIN, TEXT_RTF};
pub use payload::{ClipboardItem, ClipboardPayload};
