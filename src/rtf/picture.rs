//! Picture group scanner
//!
//! Word puts every image it copies into the RTF flavor as a `\pict`
//! group whose body is the image file written out as hex digits,
//! wrapped at arbitrary column widths:
//!
//! ```text
//! {\pict{\*\picprop ...}\picscalex100\pngblip\bliptag-1723823042{\*\blipuid 99412c3e...}
//! 89504e470d0a1a0a0000000d49484452...
//! }
//! ```
//!
//! This is not an RTF parser. The scanner recognizes only the picture
//! group shape above and takes everything else as opaque text.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::constants::{unsupported_blips, JPEG_BLIP, PNG_BLIP};
use super::types::{BlipKind, EmbeddedImageRecord, PictureGroup};
use crate::utils::hex_utils::strip_non_hex;

// `{\pict`, anything up to the first `\bliptag<N>` that lets the rest match,
// optional `\blipupi<N>`, optional `{\*\blipuid <hex>`, then closing braces
// and whitespace
const PICTURE_HEADER: &str = r"\{\\pict[\s\S]+?\\bliptag(?P<tag>-?[0-9]+)(?:\\blipupi-?[0-9]+)?(?:\{\\\*\\blipuid\s?[0-9a-fA-F]+)?[\s\}]*?";

lazy_static! {
    static ref PICTURE_GROUP: Regex = Regex::new(&format!(
        r"(?P<header>{})(?P<body>[0-9a-fA-F\s]+)\}}",
        PICTURE_HEADER
    ))
    .expect("picture group pattern is valid");
}

/// Find every picture group in an RTF payload, supported or not
///
/// # Arguments
/// * `rtf` - RTF text of the clipboard, possibly empty
///
/// # Returns
/// Picture groups in order of appearance
pub fn scan_picture_groups(rtf: &str) -> Vec<PictureGroup> {
    if rtf.is_empty() {
        return Vec::new();
    }

    let groups: Vec<PictureGroup> = PICTURE_GROUP
        .captures_iter(rtf)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            // the header capture is dropped; only the body carries image bytes
            let body = caps.name("body")?.as_str();

            Some(PictureGroup {
                offset: whole.start(),
                kind: classify(whole.as_str()),
                blip_tag: caps.name("tag").and_then(|t| t.as_str().parse().ok()),
                hex_data: strip_non_hex(body),
            })
        })
        .collect();

    debug!("Found {} picture group(s) in {} bytes of RTF", groups.len(), rtf.len());
    groups
}

/// Extract the PNG and JPEG images embedded in an RTF payload
///
/// Groups with any other blip type (metafiles, bitmaps) are skipped.
/// Absent or empty input yields an empty list.
///
/// # Arguments
/// * `rtf` - RTF flavor of the clipboard, if the host provided one
///
/// # Returns
/// Image records in order of appearance
pub fn extract_images(rtf: Option<&str>) -> Vec<EmbeddedImageRecord> {
    let rtf = match rtf {
        Some(text) if !text.is_empty() => text,
        _ => return Vec::new(),
    };

    scan_picture_groups(rtf)
        .iter()
        .filter_map(|group| {
            let record = group.to_record();
            if record.is_none() {
                debug!("Skipping {} picture group at offset {}", group.kind, group.offset);
            }
            record
        })
        .collect()
}

/// Decide the image kind from the text of a whole picture group
fn classify(group: &str) -> BlipKind {
    if group.contains(PNG_BLIP) {
        BlipKind::Png
    } else if group.contains(JPEG_BLIP) {
        BlipKind::Jpeg
    } else {
        let label = unsupported_blips::ALL
            .iter()
            .find(|(word, _)| group.contains(word))
            .map(|(_, label)| *label)
            .unwrap_or("unknown");
        BlipKind::Unsupported(label.to_string())
    }
}
