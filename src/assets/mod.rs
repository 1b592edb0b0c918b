//! Pattern mask assets: decoding, loaders, and the process-lifetime cache.

/// Shared-load memoizing cache keyed by pattern.
pub mod cache;
/// Encoded image bytes to straight RGBA8 bitmaps.
pub mod decode;
/// HTTP and directory-backed pattern loaders.
pub mod source;
