//! Result export to flat files.
//!
//! # Responsibility
//! - Pick a serialization format from the destination file extension.
//! - Render records fully in memory, then replace the destination in one step.
//!
//! # Invariants
//! - Format is derived once per call via [`ExportFormat::from_path`].
//! - A failed export never creates, truncates or partially writes the
//!   destination file.

mod delimited;
mod json;
mod spreadsheet;
mod text;

use crate::model::dork::{DorkRecord, DORK_FIELDS};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::{Builder, NamedTempFile};

pub use json::read_json_records;

pub type ExportResult<T> = Result<T, ExportError>;

const SUPPORTED_EXTENSIONS: &str = "txt|csv|json|xlsx|xls";
const EMPTY_HEADER: &[&str] = &["dork"];

/// Export errors.
#[derive(Debug)]
pub enum ExportError {
    /// Destination extension is not one of the supported formats.
    UnsupportedFormat { extension: String },
    /// The format needs a capability this build was compiled without.
    MissingCapability {
        format: ExportFormat,
        remediation: &'static str,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Csv(csv::Error),
    Json(serde_json::Error),
    #[cfg(feature = "xlsx")]
    Spreadsheet(rust_xlsxwriter::XlsxError),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat { extension } if extension.is_empty() => write!(
                f,
                "export destination has no file extension; expected {SUPPORTED_EXTENSIONS}"
            ),
            Self::UnsupportedFormat { extension } => write!(
                f,
                "unsupported export format `{extension}`; expected {SUPPORTED_EXTENSIONS}"
            ),
            Self::MissingCapability {
                format,
                remediation,
            } => write!(f, "{format} export is unavailable in this build: {remediation}"),
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
            Self::Csv(err) => write!(f, "csv encoding failed: {err}"),
            Self::Json(err) => write!(f, "json encoding failed: {err}"),
            #[cfg(feature = "xlsx")]
            Self::Spreadsheet(err) => write!(f, "spreadsheet encoding failed: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv(err) => Some(err),
            Self::Json(err) => Some(err),
            #[cfg(feature = "xlsx")]
            Self::Spreadsheet(err) => Some(err),
            Self::UnsupportedFormat { .. } | Self::MissingCapability { .. } => None,
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[cfg(feature = "xlsx")]
impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(value: rust_xlsxwriter::XlsxError) -> Self {
        Self::Spreadsheet(value)
    }
}

/// Supported export encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// One dork per line.
    Text,
    Csv,
    Json,
    /// Single-sheet workbook; serves both `xlsx` and `xls` destinations.
    Spreadsheet,
}

impl ExportFormat {
    /// Selects the format from the case-insensitive extension of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> ExportResult<Self> {
        let extension = path
            .as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_extension(&extension)
    }

    pub fn from_extension(extension: &str) -> ExportResult<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xlsx" | "xls" => Ok(Self::Spreadsheet),
            _ => Err(ExportError::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Spreadsheet => "xlsx",
        }
    }

    /// Whether this build can produce the format.
    pub fn is_available(self) -> bool {
        match self {
            Self::Spreadsheet => spreadsheet::AVAILABLE,
            Self::Text | Self::Csv | Self::Json => true,
        }
    }

    fn render(self, records: &[DorkRecord]) -> ExportResult<Vec<u8>> {
        match self {
            Self::Text => Ok(text::render(records)),
            Self::Csv => delimited::render(records),
            Self::Json => json::render(records),
            Self::Spreadsheet => spreadsheet::render(records),
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub records: usize,
    /// Size of the written file.
    pub bytes: usize,
}

/// Writes `records` to `path` in the format chosen by its extension.
///
/// Any existing file at `path` is replaced; nothing is appended.
///
/// # Errors
/// - [`ExportError::UnsupportedFormat`] for an unknown extension.
/// - [`ExportError::MissingCapability`] for spreadsheets in builds without
///   the `xlsx` feature.
/// - Encoding or I/O errors. The destination is left untouched in every
///   error case.
pub fn export_records(
    records: &[DorkRecord],
    path: impl AsRef<Path>,
) -> ExportResult<ExportSummary> {
    let path = path.as_ref();
    let started_at = Instant::now();
    let format = ExportFormat::from_path(path)?;

    let result = format
        .render(records)
        .and_then(|bytes| write_replacing(path, &bytes).map(|()| bytes.len()));

    match result {
        Ok(bytes) => {
            info!(
                "event=export module=export status=ok format={} records={} bytes={} duration_ms={}",
                format,
                records.len(),
                bytes,
                started_at.elapsed().as_millis()
            );
            Ok(ExportSummary {
                path: path.to_path_buf(),
                format,
                records: records.len(),
                bytes,
            })
        }
        Err(err) => {
            error!(
                "event=export module=export status=error format={} records={} error={}",
                format,
                records.len(),
                err
            );
            Err(err)
        }
    }
}

/// Header row for tabular formats: record keys, or `dork` for no records.
fn header(records: &[DorkRecord]) -> &'static [&'static str] {
    if records.is_empty() {
        EMPTY_HEADER
    } else {
        &DORK_FIELDS
    }
}

fn write_replacing(path: &Path, bytes: &[u8]) -> ExportResult<()> {
    let io_error = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = stage_in(dir).map_err(io_error)?;
    // An overwritten file keeps its mode, as with a truncating write.
    if let Ok(existing) = std::fs::metadata(path) {
        staged
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(io_error)?;
    }
    staged.write_all(bytes).map_err(io_error)?;
    staged.as_file().sync_all().map_err(io_error)?;
    staged.persist(path).map_err(|err| io_error(err.error))?;
    Ok(())
}

/// Temp file created with the same default mode as `std::fs::write`
/// (`0o666` less the umask) instead of tempfile's owner-only `0o600`.
fn stage_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".advaitzz-export");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
