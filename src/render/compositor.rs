use std::sync::Arc;

use crate::assets::cache::{PatternImageCache, PatternLoader};
use crate::banner::color::Color;
use crate::banner::model::{Banner, Layer};
use crate::banner::pattern::Pattern;
use crate::foundation::core::Canvas;
use crate::foundation::error::BannerResult;
use crate::render::blend::apply_mask;
use crate::render::surface::{PixelBuffer, Surface};

/// Renders banners by blending pattern masks from a shared [`PatternImageCache`].
///
/// Rendering is stateless apart from the cache: every call builds its result in a private
/// buffer and hands it to the surface only after the whole stack has been painted. A failed
/// or dropped render leaves the surface as it was.
pub struct Compositor<L> {
    cache: Arc<PatternImageCache<L>>,
}

impl<L> Clone for Compositor<L> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<L: PatternLoader> Compositor<L> {
    /// Compositor drawing masks from `cache`.
    pub fn new(cache: Arc<PatternImageCache<L>>) -> Self {
        Self { cache }
    }

    /// The shared mask cache.
    pub fn cache(&self) -> &Arc<PatternImageCache<L>> {
        &self.cache
    }

    /// Render `base` plus the visible `layers` onto `surface`.
    #[tracing::instrument(skip(self, surface, layers), fields(layers = layers.len()))]
    pub async fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        base: Color,
        layers: &[Layer],
    ) -> BannerResult<()> {
        let mut buffer = PixelBuffer::new(surface.size());
        self.render_into(&mut buffer, base, layers).await?;
        surface.write_pixels(buffer)
    }

    /// [`Compositor::render`] for a [`Banner`].
    pub async fn render_banner<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        banner: &Banner,
    ) -> BannerResult<()> {
        self.render(surface, banner.color, &banner.layers).await
    }

    /// Render a banner into a fresh buffer of `size`.
    pub async fn render_to_buffer(&self, size: Canvas, banner: &Banner) -> BannerResult<PixelBuffer> {
        let mut buffer = PixelBuffer::try_new(size)?;
        self.render_into(&mut buffer, banner.color, &banner.layers)
            .await?;
        Ok(buffer)
    }

    /// Render into `buffer`, which is cleared first.
    ///
    /// On error the buffer holds whatever was composited before the failing layer.
    pub async fn render_into(
        &self,
        buffer: &mut PixelBuffer,
        base: Color,
        layers: &[Layer],
    ) -> BannerResult<()> {
        buffer.clear();
        self.paint(buffer, Pattern::Base, base).await?;

        for layer in layers.iter().filter(|l| !l.hidden) {
            tracing::debug!(id = %layer.id, pattern = %layer.pattern, color = %layer.color, "painting layer");
            self.paint(buffer, layer.pattern, layer.color).await?;
        }
        Ok(())
    }

    /// Paint a single pattern onto `surface`.
    ///
    /// With `clear` the pattern is painted onto a transparent buffer, otherwise onto the
    /// surface's current pixels.
    #[tracing::instrument(skip(self, surface))]
    pub async fn render_pattern<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        pattern: Pattern,
        color: Color,
        clear: bool,
    ) -> BannerResult<()> {
        let mut buffer = if clear {
            PixelBuffer::new(surface.size())
        } else {
            surface.read_pixels()
        };
        self.paint(&mut buffer, pattern, color).await?;
        surface.write_pixels(buffer)
    }

    async fn paint(&self, buffer: &mut PixelBuffer, pattern: Pattern, color: Color) -> BannerResult<()> {
        let mask = self.cache.get(pattern).await?;
        apply_mask(buffer, &mask, color.rgb())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
