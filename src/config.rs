use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::assets::cache::PatternImageCache;
use crate::assets::source::{DirPatternLoader, HttpPatternLoader};
use crate::foundation::core::Canvas;
use crate::foundation::error::{BannerError, BannerResult};

/// Connection and rendering options shared by the metadata client and pattern loaders.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClientOpts {
    /// Root of the banner API; metadata lives at `{api_base_url}/v1/meta/{code}`.
    pub api_base_url: String,
    /// Pixel size of rendered banners.
    pub canvas: Canvas,
    /// Read pattern masks from `<dir>/<name>.png` instead of the API.
    pub pattern_dir: Option<PathBuf>,
    /// `User-Agent` header for HTTP requests.
    pub user_agent: String,
}

impl Default for ClientOpts {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:3000/api".to_string(),
            canvas: Canvas::BANNER,
            pattern_dir: None,
            user_agent: concat!("banner-render/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientOpts {
    /// Load options from a JSON file; absent fields keep their defaults.
    pub fn from_path(path: &Path) -> BannerResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let opts: Self = serde_json::from_slice(&bytes).map_err(|e| {
            BannerError::validation(format!("invalid config '{}': {e}", path.display()))
        })?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject options no client could work with.
    pub fn validate(&self) -> BannerResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(BannerError::validation("api_base_url must be non-empty"));
        }
        Canvas::new(self.canvas.width, self.canvas.height)?;
        Ok(())
    }

    /// HTTP client carrying the configured user agent.
    pub fn http_client(&self) -> BannerResult<reqwest::Client> {
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .build()
            .context("build http client")?;
        Ok(client)
    }

    /// Pattern cache loading over HTTP from the configured API.
    pub fn http_pattern_cache(&self) -> BannerResult<Arc<PatternImageCache<HttpPatternLoader>>> {
        let loader = HttpPatternLoader::new(self.http_client()?, self.api_base_url.clone());
        Ok(Arc::new(PatternImageCache::new(loader)))
    }

    /// Pattern cache over [`ClientOpts::pattern_dir`], if one is configured.
    pub fn dir_pattern_cache(&self) -> Option<Arc<PatternImageCache<DirPatternLoader>>> {
        self.pattern_dir
            .as_ref()
            .map(|dir| Arc::new(PatternImageCache::new(DirPatternLoader::new(dir.clone()))))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
