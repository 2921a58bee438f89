//! Tests for decoding image records

extern crate std;

use std::io::Cursor;
use image::{ImageFormat, RgbImage};

use super::test_utils::png_group;
use crate::clipboard::ImageMime;
use crate::rtf::decoder::decode_image_record;
use crate::rtf::errors::PasteError;
use crate::rtf::picture::extract_images;
use crate::rtf::types::EmbeddedImageRecord;
use crate::utils::hex_utils::bytes_to_hex;

fn encode_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, image::Rgb([200, 30, 30]));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format).unwrap();
    buffer.into_inner()
}

#[test]
fn test_decode_png_signature() {
    let record = EmbeddedImageRecord::new("89504e47", ImageMime::Png);
    let file = decode_image_record(&record).unwrap();

    std::assert_eq!(file.bytes(), &[0x89, 0x50, 0x4e, 0x47]);
    std::assert_eq!(file.len(), 4);
    std::assert_eq!(file.mime_type(), ImageMime::Png);
    std::assert_eq!(file.file_name(), "image.png");
}

#[test]
fn test_jpeg_file_name() {
    let record = EmbeddedImageRecord::new("FFD8FF", ImageMime::Jpeg);
    let file = decode_image_record(&record).unwrap();

    std::assert_eq!(file.file_name(), "image.jpg");
    std::assert_eq!(file.bytes(), &[0xff, 0xd8, 0xff]);
}

#[test]
fn test_round_trip_matches_record() {
    let record = EmbeddedImageRecord::new("0A1b2C3d4E5f", ImageMime::Jpeg);
    let file = decode_image_record(&record).unwrap();

    std::assert!(bytes_to_hex(file.bytes()).eq_ignore_ascii_case(&record.hex_data));
}

#[test]
fn test_odd_length_is_rejected() {
    let record = EmbeddedImageRecord::new("89504", ImageMime::Png);
    std::assert!(matches!(
        decode_image_record(&record),
        Err(PasteError::MalformedHexPayload(_))
    ));
}

#[test]
fn test_non_hex_is_rejected() {
    let record = EmbeddedImageRecord::new("89 50", ImageMime::Png);
    std::assert!(matches!(
        decode_image_record(&record),
        Err(PasteError::MalformedHexPayload(_))
    ));

    let empty = EmbeddedImageRecord::new("", ImageMime::Png);
    std::assert!(decode_image_record(&empty).is_err());
}

#[test]
fn test_timestamp_is_recent() {
    let record = EmbeddedImageRecord::new("00", ImageMime::Png);
    let file = decode_image_record(&record).unwrap();
    std::assert!(file.last_modified_millis() > 1_600_000_000_000);
}

#[test]
fn test_real_png_through_rtf() {
    let png = encode_image(3, 2, ImageFormat::Png);
    let rtf = png_group(&bytes_to_hex(&png));

    let records = extract_images(Some(&rtf));
    std::assert_eq!(records.len(), 1);

    let file = decode_image_record(&records[0]).unwrap();
    std::assert_eq!(file.bytes(), png.as_slice());
    std::assert_eq!(file.sniffed_mime(), Some(ImageMime::Png));
    std::assert_eq!(file.dimensions().unwrap(), (3, 2));
}

#[test]
fn test_real_jpeg_dimensions() {
    let jpeg = encode_image(8, 5, ImageFormat::Jpeg);
    let record = EmbeddedImageRecord::new(&bytes_to_hex(&jpeg).to_uppercase(), ImageMime::Jpeg);
    let file = decode_image_record(&record).unwrap();

    std::assert_eq!(file.sniffed_mime(), Some(ImageMime::Jpeg));
    std::assert_eq!(file.dimensions().unwrap(), (8, 5));
}

#[test]
fn test_truncated_image_has_no_dimensions() {
    let record = EmbeddedImageRecord::new("89504e47", ImageMime::Png);
    let file = decode_image_record(&record).unwrap();
    std::assert!(file.dimensions().is_err());
}
