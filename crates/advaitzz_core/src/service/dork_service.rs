//! Dork generation use-case service.
//!
//! # Responsibility
//! - Own the active catalog and a history store for one front end session.
//! - Run expand → record history as a single use case.
//!
//! # Invariants
//! - Expansion errors are returned to the caller unchanged.
//! - History failures never fail a run; they are logged and reported via
//!   [`RunReport::history_recorded`].

use crate::catalog::TemplateCatalog;
use crate::model::dork::DorkRecord;
use crate::repo::history_repo::HistoryRepository;
use crate::service::expander::{expand, ExpandError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    Expand(ExpandError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expand(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Expand(err) => Some(err),
        }
    }
}

impl From<ExpandError> for ServiceError {
    fn from(value: ExpandError) -> Self {
        Self::Expand(value)
    }
}

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub records: Vec<DorkRecord>,
    /// `false` when recording was skipped or the history write failed.
    pub history_recorded: bool,
}

/// Use-case service wrapping a catalog and a history repository.
pub struct DorkService<R: HistoryRepository> {
    catalog: TemplateCatalog,
    history: R,
}

impl<R: HistoryRepository> DorkService<R> {
    pub fn new(catalog: TemplateCatalog, history: R) -> Self {
        Self { catalog, history }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Mutable catalog access for runtime additions and removals.
    pub fn catalog_mut(&mut self) -> &mut TemplateCatalog {
        &mut self.catalog
    }

    pub fn history(&self) -> &R {
        &self.history
    }

    /// Expands without touching history.
    pub fn preview<S: AsRef<str>>(
        &self,
        domain: &str,
        categories: &[S],
    ) -> ServiceResult<Vec<DorkRecord>> {
        Ok(expand(&self.catalog, domain, categories)?)
    }

    /// Expands `categories` for `domain` and appends a history entry.
    ///
    /// # Contract
    /// - The history entry stores the trimmed domain, the selection as given,
    ///   `note`, and the number of records produced.
    /// - A history write failure is logged and yields
    ///   `history_recorded = false`.
    pub fn generate<S: AsRef<str>>(
        &self,
        domain: &str,
        categories: &[S],
        note: &str,
    ) -> ServiceResult<RunReport> {
        let records = expand(&self.catalog, domain, categories)?;
        info!(
            "event=expand module=service status=ok categories={} records={}",
            categories.len(),
            records.len()
        );

        let domains = vec![domain.trim().to_string()];
        let selected: Vec<String> = categories
            .iter()
            .map(|category| category.as_ref().to_string())
            .collect();

        let history_recorded = match self
            .history
            .record_run(&domains, &selected, note, records.len())
        {
            Ok(_) => true,
            Err(err) => {
                warn!(
                    "event=history_append module=service status=error error={}",
                    err
                );
                false
            }
        };

        Ok(RunReport {
            records,
            history_recorded,
        })
    }
}
