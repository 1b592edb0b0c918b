//! banner-render composites layered banner images.
//!
//! A banner is a base dye color plus an ordered stack of layers, each a named grayscale
//! pattern mask tinted by a dye. Rendering fills the canvas through the `base` mask and then
//! blends every visible layer on top, in order.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build a [`Banner`] directly, decode a banner code
//!    ([`Banner::from_code`]), or fetch its metadata ([`MetaClient::get_banner`]).
//! 2. **Load**: a [`PatternImageCache`] resolves each pattern's mask once through a
//!    [`PatternLoader`] (HTTP or a local pattern directory) and shares it afterwards.
//! 3. **Composite**: a [`Compositor`] blends masks into a private [`PixelBuffer`] and writes
//!    the result to a [`Surface`] when every layer succeeded.
//!
//! The blend is a naive per-channel interpolation on 8-bit values with truncating stores,
//! so output is bit-exact for a given input.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod assets;
mod banner;
mod config;
mod foundation;
mod render;

pub use api::meta::{BannerMeta, MetaClient, MetaPattern};
pub use assets::cache::{PatternImageCache, PatternLoader};
pub use assets::decode::{PatternBitmap, decode_pattern_bitmap};
pub use assets::source::{DirPatternLoader, HttpPatternLoader};
pub use banner::color::Color;
pub use banner::model::{Banner, Layer, MAX_CODE_LAYERS, layer_id};
pub use banner::pattern::Pattern;
pub use config::ClientOpts;
pub use foundation::core::{Canvas, Rgb8};
pub use foundation::error::{BannerError, BannerResult};
pub use render::blend::{apply_mask, blend_pixel};
pub use render::compositor::Compositor;
pub use render::surface::{MemorySurface, PixelBuffer, Surface};
