use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Context;
use futures::future::{BoxFuture, FutureExt, Shared};

use crate::assets::decode::PatternBitmap;
use crate::banner::pattern::Pattern;
use crate::foundation::error::{BannerError, BannerResult};

/// Source of decoded pattern masks, consulted once per pattern by [`PatternImageCache`].
pub trait PatternLoader: Send + Sync + 'static {
    /// Fetch and decode the mask for `pattern`.
    fn load(&self, pattern: Pattern) -> impl Future<Output = BannerResult<PatternBitmap>> + Send;
}

type LoadResult = Result<Arc<PatternBitmap>, String>;
type SharedLoad = Shared<BoxFuture<'static, LoadResult>>;

#[derive(Default)]
struct CacheInner {
    entries: HashMap<Pattern, SharedLoad>,
    loads_started: u64,
}

/// Lazily populated, never-evicting pattern mask cache.
///
/// Every pattern maps to one shared load: concurrent [`get`](Self::get) calls for the same
/// pattern await the same in-flight load, and calls after it settles resolve immediately
/// with the memoized bitmap. A failed load is reported to every waiter and then dropped, so
/// the next request issues a fresh load.
pub struct PatternImageCache<L> {
    loader: Arc<L>,
    inner: Mutex<CacheInner>,
}

impl<L: PatternLoader> PatternImageCache<L> {
    /// Empty cache over `loader`.
    pub fn new(loader: L) -> Self {
        Self {
            loader: Arc::new(loader),
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Loader backing this cache.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Resolve the mask for `pattern`, loading it on first request.
    pub async fn get(&self, pattern: Pattern) -> BannerResult<Arc<PatternBitmap>> {
        let load = self.entry(pattern);
        match load.clone().await {
            Ok(bitmap) => Ok(bitmap),
            Err(reason) => {
                self.evict(pattern, &load);
                Err(BannerError::asset_load(pattern, reason))
            }
        }
    }

    /// Memoized mask for `pattern` if its load already succeeded.
    pub fn peek(&self, pattern: Pattern) -> Option<Arc<PatternBitmap>> {
        let inner = self.lock();
        match inner.entries.get(&pattern)?.peek() {
            Some(Ok(bitmap)) => Some(Arc::clone(bitmap)),
            _ => None,
        }
    }

    /// Number of patterns with a pending or successful load.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether no pattern has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total loads issued to the loader over the cache lifetime.
    pub fn loads_started(&self) -> u64 {
        self.lock().loads_started
    }

    /// Warm every pattern in the background, ignoring individual failures.
    ///
    /// Returns immediately; requires a Tokio runtime on the calling thread.
    pub fn preload_all(self: &Arc<Self>) -> BannerResult<tokio::task::JoinHandle<()>> {
        let handle = tokio::runtime::Handle::try_current()
            .context("pattern preload needs a running Tokio runtime")?;
        let cache = Arc::clone(self);
        Ok(handle.spawn(async move {
            let loads = Pattern::ALL.iter().map(|&pattern| {
                let cache = &cache;
                async move { (pattern, cache.get(pattern).await) }
            });
            let mut failed = 0usize;
            for (pattern, result) in futures::future::join_all(loads).await {
                if let Err(err) = result {
                    failed += 1;
                    tracing::warn!(%pattern, error = %err, "pattern preload failed");
                }
            }
            tracing::debug!(
                total = Pattern::ALL.len(),
                failed,
                "pattern preload finished"
            );
        }))
    }

    fn entry(&self, pattern: Pattern) -> SharedLoad {
        let mut inner = self.lock();
        if let Some(existing) = inner.entries.get(&pattern)
            && !matches!(existing.peek(), Some(Err(_)))
        {
            tracing::debug!(%pattern, settled = existing.peek().is_some(), "pattern cache hit");
            return existing.clone();
        }

        tracing::debug!(%pattern, "pattern cache miss, starting load");
        let loader = Arc::clone(&self.loader);
        let load = async move {
            loader
                .load(pattern)
                .await
                .map(Arc::new)
                .map_err(failure_reason)
        }
        .boxed()
        .shared();

        inner.entries.insert(pattern, load.clone());
        inner.loads_started = inner.loads_started.saturating_add(1);
        load
    }

    fn evict(&self, pattern: Pattern, failed: &SharedLoad) {
        let mut inner = self.lock();
        if inner
            .entries
            .get(&pattern)
            .is_some_and(|current| current.ptr_eq(failed))
        {
            inner.entries.remove(&pattern);
            tracing::warn!(%pattern, "pattern load failed, entry evicted");
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn failure_reason(err: BannerError) -> String {
    match err {
        BannerError::AssetLoad { reason, .. } => reason,
        other => format!("{other:#}"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cache.rs"]
mod tests;
