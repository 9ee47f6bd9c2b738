//! Core domain logic for ADVAITZZ.
//! This crate owns the dork catalog, expansion, run history and export formats.

pub mod catalog;
pub mod export;
pub mod logging;
pub mod model;
pub mod progress;
pub mod repo;
pub mod service;

pub use catalog::{default_catalog, Category, CatalogError, CatalogResult, TemplateCatalog};
pub use export::{
    export_records, read_json_records, ExportError, ExportFormat, ExportResult, ExportSummary,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::dork::{DorkRecord, DOMAIN_PLACEHOLDER};
pub use model::history::HistoryEntry;
pub use progress::{with_spinner, Spinner};
pub use repo::history_repo::{HistoryError, HistoryRepository, HistoryResult, JsonHistoryStore};
pub use repo::key_store::{JsonKeyStore, KeyStoreError, KeyStoreResult};
pub use service::dork_service::{DorkService, RunReport, ServiceError, ServiceResult};
pub use service::expander::{expand, ExpandError, ExpandResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
