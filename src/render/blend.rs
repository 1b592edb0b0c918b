use crate::assets::decode::PatternBitmap;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{BannerError, BannerResult};
use crate::render::surface::PixelBuffer;

/// Paint `color` through one mask pixel onto one destination pixel.
///
/// The mask's color channels act as per-channel brightness on the tint and its alpha as
/// coverage. Blending is a naive per-channel linear interpolation in 8-bit sRGB values,
/// computed in `f64`.
///
/// - `mask` alpha 0: `dst` is returned unchanged.
/// - `dst` alpha 0: the tint is written directly, taking the mask's alpha.
/// - otherwise: the tint is interpolated over `dst` by mask alpha, brightness is applied to
///   the result, and the pixel becomes opaque.
///
/// Stored channels are truncated toward zero and clamped to `0..=255`.
pub fn blend_pixel(dst: [u8; 4], mask: [u8; 4], color: Rgb8) -> [u8; 4] {
    let [mask_r, mask_g, mask_b, mask_a] = mask;
    if mask_a == 0 {
        return dst;
    }

    let brightness = [
        f64::from(mask_r) / 255.0,
        f64::from(mask_g) / 255.0,
        f64::from(mask_b) / 255.0,
    ];
    let tint = color.to_array();

    let mut out = [0u8; 4];
    if dst[3] == 0 {
        for i in 0..3 {
            out[i] = store(f64::from(tint[i]) * brightness[i]);
        }
        out[3] = mask_a;
    } else {
        let alpha = f64::from(mask_a) / 255.0;
        for i in 0..3 {
            let mixed = f64::from(dst[i]) * (1.0 - alpha) + f64::from(tint[i]) * alpha;
            out[i] = store(mixed * brightness[i]);
        }
        out[3] = 255;
    }
    out
}

/// Blend `mask` tinted by `color` onto every pixel of `buffer`.
///
/// The mask must have exactly the buffer's dimensions.
pub fn apply_mask(buffer: &mut PixelBuffer, mask: &PatternBitmap, color: Rgb8) -> BannerResult<()> {
    if buffer.size() != mask.size() {
        return Err(BannerError::dimension_mismatch(buffer.size(), mask.size()));
    }

    for (d, m) in buffer
        .as_rgba8_mut()
        .chunks_exact_mut(4)
        .zip(mask.as_rgba8().chunks_exact(4))
    {
        let out = blend_pixel([d[0], d[1], d[2], d[3]], [m[0], m[1], m[2], m[3]], color);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn store(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
