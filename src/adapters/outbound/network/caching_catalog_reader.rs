use crate::ports::outbound::CatalogReader;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct CachedCatalog {
    data: Vec<Value>,
    fetched_at: DateTime<Utc>,
}

/// CachingCatalogReader wraps a CatalogReader with a time-boxed cache.
///
/// Entries are keyed by location and served while younger than the
/// freshness window; older entries are refetched and replaced. Failed reads
/// are never cached.
pub struct CachingCatalogReader<R: CatalogReader> {
    inner: R,
    ttl: Duration,
    cache: Arc<DashMap<String, CachedCatalog>>,
}

impl<R: CatalogReader> CachingCatalogReader<R> {
    pub fn new(inner: R, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Drops the cached copy of `location`, if any.
    pub fn invalidate(&self, location: &str) {
        self.cache.remove(location);
    }

    #[cfg(test)]
    fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: CatalogReader> CatalogReader for CachingCatalogReader<R> {
    async fn read_catalog(&self, location: &str) -> Result<Vec<Value>> {
        if let Some(cached) = self.cache.get(location) {
            if Utc::now() - cached.fetched_at < self.ttl {
                tracing::debug!(location, "Using cached catalogue");
                return Ok(cached.data.clone());
            }
        }

        let data = self.inner.read_catalog(location).await?;
        self.cache.insert(
            location.to_string(),
            CachedCatalog {
                data: data.clone(),
                fetched_at: Utc::now(),
            },
        );
        Ok(data)
    }
}
