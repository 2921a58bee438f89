//! Pasted text and HTML handling

pub mod options;
pub mod text;
pub mod sanitizer;

pub use options::PasteOptions;
pub use text::{escape_html_symbols, get_paste_text};
pub use sanitizer::{filter_markup, find_word_image_tags, get_paste_html, is_word_input, sanitize_html, WordImageTag};
