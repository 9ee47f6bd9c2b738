use super::{ExportError, ExportResult};
use crate::model::dork::DorkRecord;
use std::path::Path;

pub(super) fn render(records: &[DorkRecord]) -> ExportResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// Reads a JSON export back into records, preserving order.
pub fn read_json_records(path: impl AsRef<Path>) -> ExportResult<Vec<DorkRecord>> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_slice(&raw)?)
}
