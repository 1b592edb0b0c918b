use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{BannerError, BannerResult};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Decoded pattern mask in straight (non-premultiplied) RGBA8.
///
/// The color channels carry the mask's grayscale brightness and the alpha channel its
/// coverage. Bitmaps are shared read-only between renders.
pub struct PatternBitmap {
    width: u32,
    height: u32,
    rgba8: Arc<Vec<u8>>,
}

impl PatternBitmap {
    /// Wrap raw row-major RGBA8 bytes, checking the length against `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> BannerResult<Self> {
        let expected = Canvas { width, height }.rgba8_len()?;
        if rgba8.len() != expected {
            return Err(BannerError::validation(format!(
                "bitmap of {width}x{height} needs {expected} bytes, got {}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// Bitmap where every pixel is `px`.
    pub fn filled(size: Canvas, px: [u8; 4]) -> BannerResult<Self> {
        let len = size.rgba8_len()?;
        let rgba8: Vec<u8> = px.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width: size.width,
            height: size.height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a [`Canvas`].
    pub fn size(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Row-major RGBA8 bytes.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.rgba8
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba8[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Decode encoded image bytes (PNG) into a straight RGBA8 [`PatternBitmap`].
pub fn decode_pattern_bitmap(bytes: &[u8]) -> BannerResult<PatternBitmap> {
    let dyn_img = image::load_from_memory(bytes).context("decode pattern image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PatternBitmap::from_rgba8(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
