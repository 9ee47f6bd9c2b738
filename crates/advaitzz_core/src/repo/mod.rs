//! File-backed stores.
//!
//! # Responsibility
//! - Persist run history and key-value settings as plain JSON files.
//! - Take their backing path at construction; no process-wide paths.
//!
//! # Invariants
//! - Backing files are created on open when absent.
//! - Reads treat unreadable or malformed content as empty.

pub mod history_repo;
pub mod key_store;

use std::io;
use std::path::Path;

/// Creates `path` with `initial` content unless it already exists.
///
/// Returns `true` when the file was created.
pub(crate) fn ensure_file(path: &Path, initial: &str) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, initial)?;
    Ok(true)
}
