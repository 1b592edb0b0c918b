use super::*;

fn size(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

#[test]
fn new_buffer_is_transparent() {
    let buf = PixelBuffer::new(size(3, 2));
    assert_eq!(buf.as_rgba8().len(), 24);
    assert!(buf.as_rgba8().iter().all(|&b| b == 0));
    assert_eq!(buf.pixel(2, 1), Some([0, 0, 0, 0]));
    assert_eq!(buf.pixel(3, 0), None);
}

#[test]
fn try_new_rejects_overflowing_size() {
    assert_eq!(
        PixelBuffer::try_new(size(3, 2)).unwrap(),
        PixelBuffer::new(size(3, 2))
    );
    assert!(matches!(
        PixelBuffer::try_new(size(u32::MAX, u32::MAX)),
        Err(BannerError::Validation(_))
    ));
}

#[test]
fn from_rgba8_checks_length() {
    assert!(PixelBuffer::from_rgba8(1, 1, vec![0; 4]).is_ok());
    assert!(PixelBuffer::from_rgba8(1, 1, vec![0; 3]).is_err());
}

#[test]
fn clear_rect_only_touches_the_rect() {
    let mut buf = PixelBuffer::from_rgba8(3, 2, [9u8, 9, 9, 255].repeat(6)).unwrap();
    buf.clear_rect(1, 0, 2, 1).unwrap();
    assert_eq!(buf.pixel(0, 0), Some([9, 9, 9, 255]));
    assert_eq!(buf.pixel(1, 0), Some([0, 0, 0, 0]));
    assert_eq!(buf.pixel(2, 0), Some([0, 0, 0, 0]));
    assert_eq!(buf.pixel(1, 1), Some([9, 9, 9, 255]));

    assert!(buf.clear_rect(2, 0, 2, 1).is_err());
    assert!(buf.clear_rect(0, u32::MAX, 1, 2).is_err());
}

#[test]
fn set_pixel_bounds_checked() {
    let mut buf = PixelBuffer::new(size(1, 1));
    buf.set_pixel(0, 0, [1, 2, 3, 4]).unwrap();
    assert_eq!(buf.pixel(0, 0), Some([1, 2, 3, 4]));
    assert!(buf.set_pixel(1, 0, [0; 4]).is_err());
}

#[test]
fn png_encoding_round_trips_through_image() {
    let buf = PixelBuffer::from_rgba8(2, 1, vec![10, 20, 30, 255, 0, 0, 0, 0]).unwrap();
    let png = buf.to_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.into_raw(), buf.into_rgba8());
}

#[test]
fn memory_surface_write_requires_matching_size() {
    let mut surface = MemorySurface::new(size(2, 2));
    let err = surface
        .write_pixels(PixelBuffer::new(size(2, 3)))
        .unwrap_err();
    assert!(matches!(err, BannerError::DimensionMismatch { .. }));

    let filled = PixelBuffer::from_rgba8(2, 2, [1u8, 1, 1, 1].repeat(4)).unwrap();
    surface.write_pixels(filled.clone()).unwrap();
    assert_eq!(surface.read_pixels(), filled);

    surface.clear_rect(0, 0, 2, 2).unwrap();
    assert_eq!(surface.buffer(), &PixelBuffer::new(size(2, 2)));
}

#[test]
fn memory_surface_into_buffer_yields_last_write() {
    let mut surface = MemorySurface::new(size(1, 2));
    let pixels = PixelBuffer::from_rgba8(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    surface.write_pixels(pixels.clone()).unwrap();
    assert_eq!(surface.into_buffer(), pixels);
}
