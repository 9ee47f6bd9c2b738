//! Runtime configuration resolved from flags, environment and defaults.

use crate::cli::Cli;
use advaitzz_core::default_log_level;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

const HISTORY_FILE_NAME: &str = "advaitzz_history.json";
const KEYS_FILE_NAME: &str = "advaitzz_apikeys.json";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub history_path: PathBuf,
    pub keys_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub catalog_path: Option<PathBuf>,
    pub spinner: bool,
}

impl AppConfig {
    /// Resolves configuration against the process working directory.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine the working directory")?;
        Ok(Self::from_parts(
            &cwd,
            cli,
            std::io::stderr().is_terminal(),
        ))
    }

    /// Relative paths are anchored at `cwd`; the spinner only runs on a
    /// terminal and when not `--quiet`.
    pub fn from_parts(cwd: &Path, cli: &Cli, interactive: bool) -> Self {
        let data_dir = cli
            .data_dir
            .as_deref()
            .map(|dir| absolutize(cwd, dir))
            .unwrap_or_else(|| cwd.to_path_buf());

        Self {
            history_path: data_dir.join(HISTORY_FILE_NAME),
            keys_path: data_dir.join(KEYS_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            log_level: cli
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            catalog_path: cli.catalog.as_deref().map(|path| absolutize(cwd, path)),
            spinner: interactive && !cli.quiet,
            data_dir,
        }
    }
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
