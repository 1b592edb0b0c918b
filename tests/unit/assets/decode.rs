use std::io::Cursor;

use super::*;

fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_straight_alpha() {
    let img = image::RgbaImage::from_raw(2, 1, vec![100, 50, 200, 128, 255, 255, 255, 0]).unwrap();
    let bitmap = decode_pattern_bitmap(&png_bytes(img)).unwrap();
    assert_eq!(bitmap.size(), Canvas { width: 2, height: 1 });
    assert_eq!(bitmap.pixel(0, 0), Some([100, 50, 200, 128]));
    assert_eq!(bitmap.pixel(1, 0), Some([255, 255, 255, 0]));
    assert_eq!(bitmap.pixel(2, 0), None);
}

#[test]
fn decode_rejects_garbage() {
    let err = decode_pattern_bitmap(b"not a png").unwrap_err();
    assert!(err.to_string().contains("decode pattern image"));
}

#[test]
fn from_rgba8_checks_length() {
    assert!(PatternBitmap::from_rgba8(2, 2, vec![0; 16]).is_ok());
    assert!(PatternBitmap::from_rgba8(2, 2, vec![0; 15]).is_err());
}

#[test]
fn filled_repeats_pixel() {
    let b = PatternBitmap::filled(Canvas { width: 3, height: 2 }, [1, 2, 3, 4]).unwrap();
    assert_eq!(b.as_rgba8().len(), 24);
    assert_eq!(b.pixel(2, 1), Some([1, 2, 3, 4]));
}

#[test]
fn filled_rejects_overflowing_size() {
    let huge = Canvas {
        width: u32::MAX,
        height: u32::MAX,
    };
    assert!(matches!(
        PatternBitmap::filled(huge, [0; 4]),
        Err(BannerError::Validation(_))
    ));
}
