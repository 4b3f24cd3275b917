/// Network adapters and catalogue reader decorators
mod caching_catalog_reader;
mod http_catalog_client;
mod source_reader;

pub use caching_catalog_reader::CachingCatalogReader;
pub use http_catalog_client::HttpCatalogClient;
pub use source_reader::SourceCatalogReader;
