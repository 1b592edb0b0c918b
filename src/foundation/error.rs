use crate::banner::pattern::Pattern;
use crate::foundation::core::Canvas;

/// Convenience result type used across banner-render.
pub type BannerResult<T> = Result<T, BannerError>;

/// Top-level error taxonomy used by rendering and client APIs.
#[derive(thiserror::Error, Debug)]
pub enum BannerError {
    /// Invalid user-provided data: banner codes, names, options, rectangles.
    #[error("validation error: {0}")]
    Validation(String),

    /// Transport failure or non-2xx status while fetching banner metadata.
    #[error("metadata fetch error: {0}")]
    MetadataFetch(String),

    /// Metadata body did not match the expected `{ color, patterns }` shape.
    #[error("metadata shape error: {0}")]
    MetadataShape(String),

    /// A pattern mask could not be fetched or decoded.
    #[error("asset load error for pattern '{pattern}': {reason}")]
    AssetLoad {
        /// Pattern whose asset failed.
        pattern: Pattern,
        /// Human-readable cause.
        reason: String,
    },

    /// Mask bitmap and target buffer do not share dimensions.
    #[error(
        "dimension mismatch: expected {}x{}, got {}x{}",
        expected.width,
        expected.height,
        actual.width,
        actual.height
    )]
    DimensionMismatch {
        /// Dimensions of the buffer being painted.
        expected: Canvas,
        /// Dimensions of the offending bitmap.
        actual: Canvas,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BannerError {
    /// Build a [`BannerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BannerError::MetadataFetch`] value.
    pub fn metadata_fetch(msg: impl Into<String>) -> Self {
        Self::MetadataFetch(msg.into())
    }

    /// Build a [`BannerError::MetadataShape`] value.
    pub fn metadata_shape(msg: impl Into<String>) -> Self {
        Self::MetadataShape(msg.into())
    }

    /// Build a [`BannerError::AssetLoad`] value for `pattern`.
    pub fn asset_load(pattern: Pattern, reason: impl Into<String>) -> Self {
        Self::AssetLoad {
            pattern,
            reason: reason.into(),
        }
    }

    /// Build a [`BannerError::DimensionMismatch`] value.
    pub fn dimension_mismatch(expected: Canvas, actual: Canvas) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
