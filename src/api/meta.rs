use crate::banner::color::Color;
use crate::banner::model::{Banner, Layer, layer_id};
use crate::banner::pattern::Pattern;
use crate::config::ClientOpts;
use crate::foundation::error::{BannerError, BannerResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Banner metadata as served by the API: `{ color, patterns: [{ pattern, color }] }`.
///
/// Names are kept as strings on the wire; [`BannerMeta::to_banner`] resolves them.
pub struct BannerMeta {
    /// Base color name.
    pub color: String,
    /// Layers in paint order.
    pub patterns: Vec<MetaPattern>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One layer entry of [`BannerMeta`].
pub struct MetaPattern {
    /// Pattern name.
    pub pattern: String,
    /// Color name.
    pub color: String,
}

impl BannerMeta {
    /// Validate a response body against the metadata shape.
    pub fn parse(body: &[u8]) -> BannerResult<Self> {
        serde_json::from_slice(body).map_err(|e| BannerError::metadata_shape(e.to_string()))
    }

    /// Resolve names into a typed [`Banner`]; every layer is visible.
    pub fn to_banner(&self) -> BannerResult<Banner> {
        let color = Color::from_name(&self.color).ok_or_else(|| {
            BannerError::metadata_shape(format!("unknown base color '{}'", self.color))
        })?;

        let layers = self
            .patterns
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let pattern = Pattern::from_name(&p.pattern).ok_or_else(|| {
                    BannerError::metadata_shape(format!("patterns[{i}]: unknown pattern '{}'", p.pattern))
                })?;
                let color = Color::from_name(&p.color).ok_or_else(|| {
                    BannerError::metadata_shape(format!("patterns[{i}]: unknown color '{}'", p.color))
                })?;
                Ok(Layer::new(layer_id(i), pattern, color))
            })
            .collect::<BannerResult<Vec<_>>>()?;

        Ok(Banner { color, layers })
    }
}

impl From<&Banner> for BannerMeta {
    /// Wire form of the visible layers.
    fn from(banner: &Banner) -> Self {
        Self {
            color: banner.color.name().to_string(),
            patterns: banner
                .visible_layers()
                .map(|l| MetaPattern {
                    pattern: l.pattern.name().to_string(),
                    color: l.color.name().to_string(),
                })
                .collect(),
        }
    }
}

/// Client for `GET {base_url}/v1/meta/{code}`.
#[derive(Clone, Debug)]
pub struct MetaClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl MetaClient {
    /// Client against the API rooted at `base_url` (e.g. `https://host/api`).
    pub fn new(client: reqwest::Client, base_url: &str) -> BannerResult<Self> {
        let base_url = reqwest::Url::parse(base_url)
            .map_err(|e| BannerError::validation(format!("invalid api base url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(BannerError::validation(format!(
                "api base url '{base_url}' cannot be a base"
            )));
        }
        Ok(Self { client, base_url })
    }

    /// Client configured from `opts`.
    pub fn from_opts(opts: &ClientOpts) -> BannerResult<Self> {
        Self::new(opts.http_client()?, &opts.api_base_url)
    }

    /// Metadata URL for the banner `code`, with the code percent-encoded as one segment.
    pub fn meta_url(&self, code: &str) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["v1", "meta", code]);
        }
        url
    }

    /// Fetch and validate the metadata of the banner `code`.
    #[tracing::instrument(skip(self))]
    pub async fn get_banner_meta(&self, code: &str) -> BannerResult<BannerMeta> {
        self.fetch_meta(code)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "failed to fetch banner meta"))
    }

    /// Fetch the metadata of `code` and resolve it into a [`Banner`].
    pub async fn get_banner(&self, code: &str) -> BannerResult<Banner> {
        self.get_banner_meta(code).await?.to_banner()
    }

    async fn fetch_meta(&self, code: &str) -> BannerResult<BannerMeta> {
        let url = self.meta_url(code);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| BannerError::metadata_fetch(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BannerError::metadata_fetch(format!(
                "GET {url}: status {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BannerError::metadata_fetch(format!("GET {url}: {e}")))?;
        BannerMeta::parse(&body)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/api/meta.rs"]
mod tests;
