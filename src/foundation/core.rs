use crate::foundation::error::{BannerError, BannerResult};

/// Pixel dimensions of a buffer, bitmap, or surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Size of a banner texture with its one-pixel atlas border cropped off.
    pub const BANNER: Canvas = Canvas {
        width: 20,
        height: 40,
    };

    /// Largest accepted side length in pixels.
    pub const MAX_SIDE: u32 = 16_384;

    /// Create a validated canvas with sides in `1..=MAX_SIDE`.
    pub fn new(width: u32, height: u32) -> BannerResult<Self> {
        if width == 0 || height == 0 {
            return Err(BannerError::validation("canvas width and height must be > 0"));
        }
        if width > Self::MAX_SIDE || height > Self::MAX_SIDE {
            return Err(BannerError::validation(format!(
                "canvas {width}x{height} exceeds the {max}x{max} limit",
                max = Self::MAX_SIDE
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Length in bytes of a tightly packed RGBA8 buffer of this size.
    pub fn rgba8_len(self) -> BannerResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| BannerError::validation("canvas byte size overflow"))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::BANNER
    }
}

impl std::str::FromStr for Canvas {
    type Err = BannerError;

    /// Parse `WIDTHxHEIGHT`, e.g. `20x40`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| BannerError::validation(format!("canvas '{s}' must be WxH")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| BannerError::validation(format!("invalid canvas side '{v}'")))
        };
        Self::new(parse(w)?, parse(h)?)
    }
}

/// Straight (non-premultiplied) 8-bit RGB triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Split a `0xRRGGBB` value into channels.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Pack channels back into `0xRRGGBB`.
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Channels as an array in `[r, g, b]` order.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
