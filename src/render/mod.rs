//! Layer compositing: pixel buffers, the per-pixel blend rule, and the compositor.

/// Per-pixel tint blending of a mask onto a buffer.
pub mod blend;
/// Base + layer stack rendering through the pattern cache.
pub mod compositor;
/// Pixel buffers and display surfaces.
pub mod surface;
