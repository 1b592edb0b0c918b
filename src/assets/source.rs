use std::path::PathBuf;

use crate::assets::cache::PatternLoader;
use crate::assets::decode::{PatternBitmap, decode_pattern_bitmap};
use crate::banner::pattern::Pattern;
use crate::foundation::error::{BannerError, BannerResult};

/// Loads pattern masks from `GET {base_url}/v1/pattern/{name}`.
///
/// Requests carry no cookies or credentials.
#[derive(Clone, Debug)]
pub struct HttpPatternLoader {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPatternLoader {
    /// Loader against the API rooted at `base_url` (e.g. `https://host/api`).
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Absolute URL of the mask asset for `pattern`.
    pub fn pattern_url(&self, pattern: Pattern) -> String {
        format!("{}/v1/pattern/{}", self.base_url, pattern.url_path())
    }
}

impl PatternLoader for HttpPatternLoader {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn load(&self, pattern: Pattern) -> BannerResult<PatternBitmap> {
        let url = self.pattern_url(pattern);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BannerError::asset_load(pattern, format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BannerError::asset_load(
                pattern,
                format!("GET {url}: status {status}"),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BannerError::asset_load(pattern, format!("GET {url}: {e}")))?;
        tracing::debug!(%pattern, len = bytes.len(), "pattern asset fetched");

        decode_pattern_bitmap(&bytes).map_err(|e| BannerError::asset_load(pattern, format!("{e:#}")))
    }
}

/// Loads pattern masks from `<dir>/<name>.png`.
#[derive(Clone, Debug)]
pub struct DirPatternLoader {
    dir: PathBuf,
}

impl DirPatternLoader {
    /// Loader over the pattern directory `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing `pattern`.
    pub fn pattern_path(&self, pattern: Pattern) -> PathBuf {
        self.dir.join(format!("{}.png", pattern.name()))
    }
}

impl PatternLoader for DirPatternLoader {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn load(&self, pattern: Pattern) -> BannerResult<PatternBitmap> {
        let path = self.pattern_path(pattern);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| BannerError::asset_load(pattern, format!("read '{}': {e}", path.display())))?;
        decode_pattern_bitmap(&bytes).map_err(|e| {
            BannerError::asset_load(pattern, format!("decode '{}': {e:#}", path.display()))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
