//! Plain-text paste handling

use lazy_static::lazy_static;
use regex::Regex;

use crate::clipboard::ClipboardPayload;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid");
}

/// Escape text so it can be inserted into the editor as HTML
///
/// Angle brackets and double quotes become entities and every line
/// break (`\r\n`, `\r` or `\n`) becomes `<br/>`. `None` gives an empty string.
pub fn escape_html_symbols(text: Option<&str>) -> String {
    let text = match text {
        Some(t) => t,
        None => return String::new(),
    };

    let escaped = text
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;");
    LINE_BREAK.replace_all(&escaped, "<br/>").into_owned()
}

/// Plain text of a paste, escaped for insertion as HTML
pub fn get_paste_text(payload: &ClipboardPayload) -> String {
    escape_html_symbols(payload.plain_text())
}
