//! Tests for the picture group scanner

extern crate std;

use super::test_utils::{document, jpeg_group, png_group, wmf_group};
use crate::clipboard::ImageMime;
use crate::rtf::picture::{extract_images, scan_picture_groups};
use crate::rtf::types::BlipKind;

const PNG_HEX: &str = "89504e470d0a1a0a0000000d49484452";
const JPEG_HEX: &str = "ffd8ffe000104a46494600010100";

#[test]
fn test_empty_input_yields_nothing() {
    std::assert!(extract_images(None).is_empty());
    std::assert!(extract_images(Some("")).is_empty());
    std::assert!(scan_picture_groups("").is_empty());
}

#[test]
fn test_rtf_without_pictures() {
    let rtf = document("{\\b plain bold text}");
    std::assert!(extract_images(Some(&rtf)).is_empty());
}

#[test]
fn test_png_then_jpeg_keeps_order() {
    let rtf = document(&format!("{} middle {}", png_group(PNG_HEX), jpeg_group(JPEG_HEX)));
    let records = extract_images(Some(&rtf));

    std::assert_eq!(records.len(), 2);
    std::assert_eq!(records[0].mime_type, ImageMime::Png);
    std::assert_eq!(records[1].mime_type, ImageMime::Jpeg);
    std::assert_eq!(records[0].hex_data, PNG_HEX);
    std::assert_eq!(records[1].hex_data, JPEG_HEX);
}

#[test]
fn test_jpeg_then_png_keeps_order() {
    let rtf = document(&format!("{}{}", jpeg_group(JPEG_HEX), png_group(PNG_HEX)));
    let mimes: Vec<ImageMime> = extract_images(Some(&rtf)).iter().map(|r| r.mime_type).collect();
    std::assert_eq!(mimes, vec![ImageMime::Jpeg, ImageMime::Png]);
}

#[test]
fn test_metafile_group_is_skipped() {
    let rtf = document(&format!(
        "{}{}{}",
        png_group(PNG_HEX),
        wmf_group("0100090000036e0400000000"),
        jpeg_group(JPEG_HEX)
    ));

    let records = extract_images(Some(&rtf));
    std::assert_eq!(records.len(), 2);
    std::assert_eq!(records[0].mime_type, ImageMime::Png);
    std::assert_eq!(records[1].mime_type, ImageMime::Jpeg);

    let groups = scan_picture_groups(&rtf);
    std::assert_eq!(groups.len(), 3);
    std::assert_eq!(groups[1].kind, BlipKind::Unsupported("WMF".to_string()));
}

#[test]
fn test_blip_uid_is_not_part_of_payload() {
    let rtf = png_group(PNG_HEX);
    let groups = scan_picture_groups(&rtf);

    std::assert_eq!(groups.len(), 1);
    std::assert_eq!(groups[0].hex_data, PNG_HEX);
    std::assert_eq!(groups[0].blip_tag, Some(-1723823042));
    std::assert_eq!(groups[0].byte_len(), PNG_HEX.len() / 2);
}

#[test]
fn test_interleaved_whitespace_is_stripped() {
    let rtf = "{\\pict\\pngblip\\bliptag1\n89 50\n4e 47}";
    let records = extract_images(Some(rtf));

    std::assert_eq!(records.len(), 1);
    std::assert_eq!(records[0].hex_data, "89504e47");
}

#[test]
fn test_offsets_point_at_pict() {
    let rtf = document(&jpeg_group(JPEG_HEX));
    let groups = scan_picture_groups(&rtf);

    std::assert_eq!(groups.len(), 1);
    std::assert!(rtf[groups[0].offset..].starts_with("{\\pict"));
    std::assert_eq!(groups[0].blip_tag, Some(255));
}

#[test]
fn test_group_without_blip_tag_is_ignored() {
    let rtf = "{\\pict\\pngblip\\picw10\\pich10\n89504e47}";
    std::assert!(extract_images(Some(rtf)).is_empty());
}
