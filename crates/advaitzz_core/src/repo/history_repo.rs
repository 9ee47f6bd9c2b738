//! Run history store backed by a single JSON array file.
//!
//! # Responsibility
//! - Append one entry per expansion run.
//! - List past runs in append order.
//!
//! # Invariants
//! - Entries are never mutated or deleted.
//! - Each append rewrites the whole file.
//! - Write failures surface as errors; read failures yield an empty log.

use super::ensure_file;
use crate::model::history::HistoryEntry;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type HistoryResult<T> = Result<T, HistoryError>;

/// History persistence errors.
#[derive(Debug)]
pub enum HistoryError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl Display for HistoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "history file `{}` I/O failed: {source}", path.display())
            }
            Self::Json(err) => write!(f, "history serialization failed: {err}"),
        }
    }
}

impl Error for HistoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Append-only log of expansion runs.
pub trait HistoryRepository {
    fn record_run(
        &self,
        domains: &[String],
        categories: &[String],
        note: &str,
        count: usize,
    ) -> HistoryResult<HistoryEntry>;
    fn list_runs(&self) -> Vec<HistoryEntry>;
}

/// History store persisted as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    /// Opens the store at `path`, creating `[]` there if nothing exists yet.
    pub fn open(path: impl Into<PathBuf>) -> HistoryResult<Self> {
        let path = path.into();
        let created = ensure_file(&path, "[]").map_err(|source| HistoryError::Io {
            path: path.clone(),
            source,
        })?;
        if created {
            info!(
                "event=history_create module=repo status=ok path={}",
                path.display()
            );
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> HistoryResult<Vec<HistoryEntry>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| HistoryError::Io {
            path: self.path.clone(),
            source,
        })?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

impl HistoryRepository for JsonHistoryStore {
    fn record_run(
        &self,
        domains: &[String],
        categories: &[String],
        note: &str,
        count: usize,
    ) -> HistoryResult<HistoryEntry> {
        let mut entries = self.read_entries().unwrap_or_else(|err| {
            warn!(
                "event=history_read module=repo status=reset path={} error={}",
                self.path.display(),
                err
            );
            Vec::new()
        });

        let entry = HistoryEntry::now(
            domains.to_vec(),
            categories.to_vec(),
            note.to_string(),
            count,
        );
        entries.push(entry.clone());

        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json).map_err(|source| HistoryError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "event=history_append module=repo status=ok entries={} count={}",
            entries.len(),
            count
        );
        Ok(entry)
    }

    fn list_runs(&self) -> Vec<HistoryEntry> {
        self.read_entries().unwrap_or_else(|err| {
            warn!(
                "event=history_read module=repo status=empty path={} error={}",
                self.path.display(),
                err
            );
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{HistoryError, JsonHistoryStore};

    #[test]
    fn read_errors_stay_typed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let store = JsonHistoryStore::open(&path).unwrap();

        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(store.read_entries(), Err(HistoryError::Json(_))));

        std::fs::remove_file(&path).unwrap();
        match store.read_entries() {
            Err(HistoryError::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }
}
