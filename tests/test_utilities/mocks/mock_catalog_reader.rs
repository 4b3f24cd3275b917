use async_trait::async_trait;
use dep_catalog::prelude::*;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock CatalogReader returning a fixed document
pub struct MockCatalogReader {
    pub records: Vec<Value>,
    pub should_fail: bool,
    pub calls: Arc<AtomicUsize>,
}

impl MockCatalogReader {
    pub fn new(document: Value) -> Self {
        Self {
            records: document.as_array().cloned().unwrap_or_default(),
            should_fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            records: Vec::new(),
            should_fail: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogReader for MockCatalogReader {
    async fn read_catalog(&self, _location: &str) -> Result<Vec<Value>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock catalogue read failure");
        }
        Ok(self.records.clone())
    }
}
