/// Catalogue document parsing shared by the file and HTTP readers
mod catalog_document;

pub use catalog_document::parse_catalog_document;
