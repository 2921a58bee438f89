//! Paste handling on top of the RTF and HTML filters

pub mod handler;
pub mod upload;

pub use handler::{pair_word_images, PasteHandler, PastedHtml, WordImage};
pub use upload::{replace_image_src, ImageUploader};
