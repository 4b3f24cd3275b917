/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the catalogue core isolated.
mod catalog_request;
mod catalog_response;
mod output_format;

pub use catalog_request::{LoadRequest, QueryRequest};
pub use catalog_response::LoadResponse;
pub use output_format::OutputFormat;
