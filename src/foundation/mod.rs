//! Shared value types and the crate error.

/// Canvas sizes and RGB colors.
pub mod core;
/// [`BannerError`](error::BannerError) and its result alias.
pub mod error;
