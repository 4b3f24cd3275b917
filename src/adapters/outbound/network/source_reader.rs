use super::http_catalog_client::HttpCatalogClient;
use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::ports::outbound::CatalogReader;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// SourceCatalogReader routes a location to the file or HTTP reader.
pub struct SourceCatalogReader {
    file_reader: FileSystemReader,
    http_client: HttpCatalogClient,
}

impl SourceCatalogReader {
    pub fn new(file_reader: FileSystemReader, http_client: HttpCatalogClient) -> Self {
        Self {
            file_reader,
            http_client,
        }
    }

    pub fn is_remote(location: &str) -> bool {
        let lower = location.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }
}

#[async_trait]
impl CatalogReader for SourceCatalogReader {
    async fn read_catalog(&self, location: &str) -> Result<Vec<Value>> {
        if Self::is_remote(location) {
            self.http_client.read_catalog(location).await
        } else {
            self.file_reader.read_catalog(location).await
        }
    }
}
