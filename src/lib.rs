pub mod clipboard;
pub mod rtf;
pub mod html;
pub mod paste;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::PasteKit;

pub use clipboard::{ClipboardItem, ClipboardPayload, ImageMime};
pub use rtf::{decode_image_record, extract_images, DecodedImageFile, EmbeddedImageRecord, PasteError, PasteResult};
pub use html::PasteOptions;
pub use paste::{ImageUploader, PasteHandler, PastedHtml, WordImage};
