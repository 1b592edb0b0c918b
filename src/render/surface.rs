use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{BannerError, BannerResult};

/// Mutable grid of straight RGBA8 pixels, tightly packed and row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Fully transparent buffer of `size`.
    ///
    /// `size` is trusted; use [`PixelBuffer::try_new`] for sizes from outside the crate.
    pub fn new(size: Canvas) -> Self {
        Self {
            width: size.width,
            height: size.height,
            data: vec![0; size.pixel_count().saturating_mul(4)],
        }
    }

    /// Fully transparent buffer of `size`, rejecting sizes whose byte length overflows.
    pub fn try_new(size: Canvas) -> BannerResult<Self> {
        let len = size.rgba8_len()?;
        Ok(Self {
            width: size.width,
            height: size.height,
            data: vec![0; len],
        })
    }

    /// Wrap existing bytes, checking the length against `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> BannerResult<Self> {
        let expected = Canvas { width, height }.rgba8_len()?;
        if data.len() != expected {
            return Err(BannerError::validation(format!(
                "pixel buffer of {width}x{height} needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
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

    /// RGBA8 bytes.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.data
    }

    /// Mutable RGBA8 bytes.
    pub fn as_rgba8_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume into the raw RGBA8 bytes.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.index(x, y)?;
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrite the pixel at `(x, y)`; out-of-bounds writes are rejected.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) -> BannerResult<()> {
        let idx = self.index(x, y).ok_or_else(|| {
            BannerError::validation(format!(
                "pixel ({x}, {y}) outside {}x{} buffer",
                self.width, self.height
            ))
        })?;
        self.data[idx..idx + 4].copy_from_slice(&px);
        Ok(())
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Reset the `width x height` rectangle at `(x, y)` to transparent black.
    pub fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32) -> BannerResult<()> {
        let fits = |origin: u32, len: u32, max: u32| origin.checked_add(len).is_some_and(|e| e <= max);
        if !fits(x, width, self.width) || !fits(y, height, self.height) {
            return Err(BannerError::validation(format!(
                "clear rect {width}x{height} at ({x}, {y}) exceeds {}x{} buffer",
                self.width, self.height
            )));
        }

        let stride = self.width as usize * 4;
        for row in y..y + height {
            let start = row as usize * stride + x as usize * 4;
            self.data[start..start + width as usize * 4].fill(0);
        }
        Ok(())
    }

    /// Copy into an [`image::RgbaImage`].
    pub fn to_rgba_image(&self) -> BannerResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| BannerError::validation("pixel buffer does not match its dimensions"))
    }

    /// Encode as PNG bytes.
    pub fn to_png(&self) -> BannerResult<Vec<u8>> {
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(self.to_rgba_image()?)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode png")?;
        Ok(buf)
    }

    /// Write as a PNG file at `path`.
    pub fn write_png(&self, path: &Path) -> BannerResult<()> {
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}

/// Display target the compositor reads from and writes finished renders to.
pub trait Surface {
    /// Current pixel dimensions.
    fn size(&self) -> Canvas;

    /// Snapshot of the current pixels.
    fn read_pixels(&self) -> PixelBuffer;

    /// Replace the whole surface with `pixels`, which must match [`Surface::size`].
    fn write_pixels(&mut self, pixels: PixelBuffer) -> BannerResult<()>;

    /// Reset a rectangle to fully transparent.
    fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32) -> BannerResult<()>;
}

/// In-memory [`Surface`] backed by a [`PixelBuffer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemorySurface {
    buffer: PixelBuffer,
}

impl MemorySurface {
    /// Transparent surface of `size`.
    pub fn new(size: Canvas) -> Self {
        Self {
            buffer: PixelBuffer::new(size),
        }
    }

    /// Current contents.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Consume into the current contents.
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> Canvas {
        self.buffer.size()
    }

    fn read_pixels(&self) -> PixelBuffer {
        self.buffer.clone()
    }

    fn write_pixels(&mut self, pixels: PixelBuffer) -> BannerResult<()> {
        if pixels.size() != self.buffer.size() {
            return Err(BannerError::dimension_mismatch(
                self.buffer.size(),
                pixels.size(),
            ));
        }
        self.buffer = pixels;
        Ok(())
    }

    fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32) -> BannerResult<()> {
        self.buffer.clear_rect(x, y, width, height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
