use super::*;
use crate::foundation::core::Canvas;

const TINT: Rgb8 = Rgb8::new(200, 50, 10);
const WHITE_OPAQUE: [u8; 4] = [255, 255, 255, 255];

#[test]
fn transparent_mask_leaves_dst_untouched() {
    for dst in [[0, 0, 0, 0], [1, 2, 3, 4], [100, 100, 100, 255], [9, 8, 7, 0]] {
        assert_eq!(blend_pixel(dst, [255, 255, 255, 0], TINT), dst);
        assert_eq!(blend_pixel(dst, [17, 99, 3, 0], TINT), dst);
    }
}

#[test]
fn opaque_white_mask_on_empty_dst_writes_tint() {
    assert_eq!(blend_pixel([0, 0, 0, 0], WHITE_OPAQUE, TINT), [200, 50, 10, 255]);
}

#[test]
fn opaque_white_mask_replaces_existing_color() {
    assert_eq!(
        blend_pixel([100, 100, 100, 255], WHITE_OPAQUE, TINT),
        [200, 50, 10, 255]
    );
}

#[test]
fn first_paint_takes_mask_alpha() {
    assert_eq!(
        blend_pixel([0, 0, 0, 0], [255, 255, 255, 128], TINT),
        [200, 50, 10, 128]
    );
}

#[test]
fn first_paint_applies_per_channel_brightness() {
    // 200 * 128/255 = 100.39, 50 * 64/255 = 12.54, 10 * 0 = 0
    assert_eq!(
        blend_pixel([0, 0, 0, 0], [128, 64, 0, 255], TINT),
        [100, 12, 0, 255]
    );
}

#[test]
fn partial_alpha_lerps_then_forces_opaque() {
    // alpha = 51/255 = 0.2: 100*0.8 + 200*0.2 = 120, 100*0.8 + 50*0.2 = 90, 100*0.8 + 10*0.2 = 82
    assert_eq!(
        blend_pixel([100, 100, 100, 10], [255, 255, 255, 51], TINT),
        [120, 90, 82, 255]
    );
}

#[test]
fn lerp_is_computed_in_double_precision() {
    // 80 * (1 - 5/255) + 29 * 5/255 is 78.99999999999999 in f64 and stores as 78
    assert_eq!(
        blend_pixel([80, 0, 0, 255], [255, 255, 255, 5], Rgb8::new(29, 0, 0)),
        [78, 0, 0, 255]
    );
}

#[test]
fn brightness_applies_after_the_lerp() {
    // (0*0 + 200*1) * 0.5 -> 100 (truncated from 100.39)
    let out = blend_pixel([0, 0, 0, 255], [128, 255, 255, 255], TINT);
    assert_eq!(out, [100, 50, 10, 255]);
}

#[test]
fn stored_values_truncate_toward_zero() {
    // 10 * 200/255 = 7.84 and 50 * 200/255 = 39.2: truncation, not rounding
    let out = blend_pixel([0, 0, 0, 0], [200, 200, 255, 255], Rgb8::new(10, 50, 7));
    assert_eq!(out, [7, 39, 7, 255]);
}

#[test]
fn apply_mask_blends_every_pixel() {
    let size = Canvas {
        width: 2,
        height: 1,
    };
    let mask =
        PatternBitmap::from_rgba8(2, 1, vec![255, 255, 255, 255, 255, 255, 255, 0]).unwrap();
    let mut buffer = PixelBuffer::from_rgba8(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 255]).unwrap();
    assert_eq!(buffer.size(), size);

    apply_mask(&mut buffer, &mask, TINT).unwrap();
    assert_eq!(buffer.pixel(0, 0), Some([200, 50, 10, 255]));
    assert_eq!(buffer.pixel(1, 0), Some([4, 5, 6, 255]));
}

#[test]
fn apply_mask_rejects_mismatched_dimensions() {
    let mask = PatternBitmap::filled(
        Canvas {
            width: 22,
            height: 42,
        },
        WHITE_OPAQUE,
    )
    .unwrap();
    let mut buffer = PixelBuffer::new(Canvas::BANNER);
    let before = buffer.clone();

    let err = apply_mask(&mut buffer, &mask, TINT).unwrap_err();
    assert!(matches!(err, BannerError::DimensionMismatch { .. }));
    assert_eq!(buffer, before);
}
