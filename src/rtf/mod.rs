//! RTF picture extraction module
//!
//! This module finds the images Word embeds in the RTF clipboard flavor
//! and turns them into in-memory files that can be uploaded.

pub mod errors;
pub mod types;
pub mod picture;
pub mod decoder;
pub(crate) mod constants;
#[cfg(test)]
mod tests;

pub use errors::{PasteError, PasteResult};
pub use types::{BlipKind, EmbeddedImageRecord, PictureGroup};
pub use picture::{extract_images, scan_picture_groups};
pub use decoder::{decode_image_record, DecodedImageFile};
