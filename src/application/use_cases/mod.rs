/// Use cases module containing application logic orchestration
mod list_history;
mod load_catalog;
mod query_catalog;

pub use list_history::ListHistoryUseCase;
pub use load_catalog::LoadCatalogUseCase;
pub use query_catalog::QueryCatalogUseCase;
