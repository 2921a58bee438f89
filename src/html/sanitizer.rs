//! Pasted HTML filtering
//!
//! Removes the markup that word processors and web pages put on the
//! clipboard but that an editor should not keep. This is a fixed set of
//! pattern filters, not an allow-list sanitizer.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::options::PasteOptions;
use super::text::escape_html_symbols;
use crate::clipboard::ClipboardPayload;

lazy_static! {
    static ref WORD_GENERATOR: Regex = Regex::new(
        r#"(?i)<meta\s*name="?generator"?\s*content="?microsoft\s*word\s*[0-9]+"?/?>"#
    ).expect("word generator pattern is valid");
    static ref WORD_NAMESPACE: Regex = Regex::new(
        r#"(?i)xmlns:o="urn:schemas-microsoft-com"#
    ).expect("word namespace pattern is valid");
    static ref MULTILINE_COMMENT: Regex = Regex::new(r"<!--[\s\S]*?-->").expect("comment pattern is valid");
    static ref COMMENT: Regex = Regex::new(r"<!--.*?-->").expect("comment pattern is valid");
    static ref HEAD_TAGS: Regex = Regex::new(r"(?i)<(?:meta|script|link).+?>").expect("head tag pattern is valid");
    static ref DATA_ATTRIBUTE: Regex = Regex::new(r#"(?i)\s?data-.+?=['"].+?['"]"#).expect("data attribute pattern is valid");
    static ref IMG_TAG: Regex = Regex::new(r"(?i)<img.+?>").expect("img pattern is valid");
    static ref CLASS_ATTRIBUTE: Regex = Regex::new(r#"(?i)\s?class=['"].*?['"]"#).expect("class pattern is valid");
    static ref CLASS_OR_STYLE_ATTRIBUTE: Regex = Regex::new(r#"(?i)\s?(?:class|style)=['"].*?['"]"#).expect("style pattern is valid");
    static ref WORD_IMG_TAG: Regex = Regex::new(
        r#"<img width=[0-9]+? height=[0-9]+?[\s\S]+?src="(?P<src>\S+?)""#
    ).expect("word img pattern is valid");
}

/// An `<img>` tag written by Word, whose `src` points at a local temp file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordImageTag {
    /// Matched text, from `<img` up to the end of the `src` attribute
    pub tag: String,
    /// Value of the `src` attribute
    pub src: String,
}

/// Whether the HTML was put on the clipboard by Microsoft Word
pub fn is_word_input(html: &str) -> bool {
    !html.is_empty() && (WORD_GENERATOR.is_match(html) || WORD_NAMESPACE.is_match(html))
}

/// Remove the conditional comments and style blocks-in-comments Word emits
pub fn clear_word_redundance(html: &str) -> String {
    MULTILINE_COMMENT.replace_all(html, "").into_owned()
}

/// Remove `<meta>`, `<script>` and `<link>` tags, comments and `data-*` attributes
pub fn strip_page_markup(html: &str) -> String {
    let html = HEAD_TAGS.replace_all(html, "");
    let html = COMMENT.replace_all(&html, "");
    DATA_ATTRIBUTE.replace_all(&html, "").into_owned()
}

/// Remove every `<img>` tag
pub fn strip_images(html: &str) -> String {
    IMG_TAG.replace_all(html, "").into_owned()
}

/// Remove `class` attributes, and `style` attributes too when `filter_style` is set
pub fn strip_style_attributes(html: &str, filter_style: bool) -> String {
    if filter_style {
        CLASS_OR_STYLE_ATTRIBUTE.replace_all(html, "").into_owned()
    } else {
        CLASS_ATTRIBUTE.replace_all(html, "").into_owned()
    }
}

/// Find the image tags Word wrote, in document order
pub fn find_word_image_tags(html: &str) -> Vec<WordImageTag> {
    WORD_IMG_TAG
        .captures_iter(html)
        .filter_map(|caps| {
            Some(WordImageTag {
                tag: caps.get(0)?.as_str().to_string(),
                src: caps.name("src")?.as_str().to_string(),
            })
        })
        .collect()
}

/// HTML flavor of the paste, falling back to the escaped plain text in a paragraph
pub fn raw_paste_html(payload: &ClipboardPayload) -> Option<String> {
    if let Some(html) = payload.html() {
        return Some(html.to_string());
    }

    payload.plain_text()
        .map(|text| format!("<p>{}</p>", escape_html_symbols(Some(text))))
}

/// Remove word-processor or page markup, and images when asked to
///
/// Style attributes are left alone so that image tags can still be
/// matched against their Word pattern afterwards.
pub fn filter_markup(html: &str, options: &PasteOptions) -> String {
    let html = if is_word_input(html) {
        debug!("Pasted HTML comes from Microsoft Word");
        clear_word_redundance(html)
    } else {
        strip_page_markup(html)
    };

    if options.ignore_img {
        strip_images(&html)
    } else {
        html
    }
}

/// Apply every filter to a piece of pasted HTML
///
/// # Arguments
/// * `html` - Raw HTML from the clipboard
/// * `options` - Style and image filtering switches
///
/// # Returns
/// The filtered HTML
pub fn sanitize_html(html: &str, options: &PasteOptions) -> String {
    strip_style_attributes(&filter_markup(html, options), options.filter_style)
}

/// Filtered HTML of a paste, or `None` when the clipboard has no text at all
pub fn get_paste_html(payload: &ClipboardPayload, options: &PasteOptions) -> Option<String> {
    raw_paste_html(payload).map(|html| sanitize_html(&html, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{TEXT_HTML, TEXT_PLAIN};

    const WORD_HTML: &str = "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\">\
        <head><meta name=Generator content=\"Microsoft Word 15\">\
        <!--[if gte mso 9]><xml>\n<o:OfficeDocumentSettings/>\n</xml><![endif]--></head>\
        <body><p class=MsoNormal style=\"margin:0\">Hello</p></body></html>";

    #[test]
    fn test_word_detection() {
        assert!(is_word_input(WORD_HTML));
        assert!(is_word_input("<meta name=\"generator\" content=\"Microsoft Word 12\">"));
        assert!(!is_word_input("<p>plain</p>"));
        assert!(!is_word_input(""));
    }

    #[test]
    fn test_word_comments_removed_across_lines() {
        let cleaned = clear_word_redundance(WORD_HTML);
        assert!(!cleaned.contains("OfficeDocumentSettings"));
        assert!(cleaned.contains("Hello"));
    }

    #[test]
    fn test_page_markup_removed() {
        let html = "<meta charset=\"utf-8\"><script src=\"x.js\"></script><!-- note -->\
            <p data-id=\"7\" data-track='a'>Hi</p>";
        assert_eq!(strip_page_markup(html), "</script><p>Hi</p>");
    }

    #[test]
    fn test_style_filtering() {
        let html = "<p class=\"a\" style=\"color:red\">x</p>";
        assert_eq!(strip_style_attributes(html, true), "<p>x</p>");
        assert_eq!(strip_style_attributes(html, false), "<p style=\"color:red\">x</p>");
    }

    #[test]
    fn test_ignore_images() {
        let options = PasteOptions { filter_style: true, ignore_img: true };
        assert_eq!(sanitize_html("<p>a<img src=\"x.png\">b</p>", &options), "<p>ab</p>");
    }

    #[test]
    fn test_word_image_tags_in_order() {
        let html = "<img width=132 height=97 src=\"file:///C:/Temp/image001.png\" alt=x>\
            <img src=\"https://example.com/a.png\">\
            <img width=20 height=10\nv:shapes=\"Picture_2\" src=\"file:///C:/Temp/image002.jpg\">";
        let tags = find_word_image_tags(html);

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].src, "file:///C:/Temp/image001.png");
        assert_eq!(tags[1].src, "file:///C:/Temp/image002.jpg");
    }

    #[test]
    fn test_plain_text_fallback() {
        let payload = ClipboardPayload::new().with_data(TEXT_PLAIN, "a<b\nc");
        let html = get_paste_html(&payload, &PasteOptions::default()).unwrap();
        assert_eq!(html, "<p>a&lt;b<br/>c</p>");
    }

    #[test]
    fn test_nothing_to_paste() {
        assert!(get_paste_html(&ClipboardPayload::new(), &PasteOptions::default()).is_none());
    }

    #[test]
    fn test_html_preferred_over_text() {
        let payload = ClipboardPayload::new()
            .with_data(TEXT_PLAIN, "ignored")
            .with_data(TEXT_HTML, "<b class=\"k\">bold</b>");
        assert_eq!(get_paste_html(&payload, &PasteOptions::default()).unwrap(), "<b>bold</b>");
    }
}
