//! Plain key-value store for provider API keys and similar settings.
//!
//! Values are stored verbatim in a JSON object; there is no encryption.

use super::ensure_file;
use log::info;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type KeyStoreResult<T> = Result<T, KeyStoreError>;

#[derive(Debug)]
pub enum KeyStoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for KeyStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "key store I/O failed: {err}"),
            Self::Json(err) => write!(f, "key store is not a JSON object of strings: {err}"),
        }
    }
}

impl Error for KeyStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for KeyStoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for KeyStoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone)]
pub struct JsonKeyStore {
    path: PathBuf,
}

impl JsonKeyStore {
    /// Opens the store at `path`, creating `{}` there if nothing exists yet.
    pub fn open(path: impl Into<PathBuf>) -> KeyStoreResult<Self> {
        let path = path.into();
        ensure_file(&path, "{}")?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> KeyStoreResult<BTreeMap<String, String>> {
        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, data: &BTreeMap<String, String>) -> KeyStoreResult<()> {
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, json)?;
        info!(
            "event=keystore_save module=repo status=ok keys={}",
            data.len()
        );
        Ok(())
    }

    pub fn get(&self, key: &str) -> KeyStoreResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> KeyStoreResult<()> {
        let mut data = self.load()?;
        data.insert(key.into(), value.into());
        self.save(&data)
    }

    /// Removes `key`. Returns `false` when it was not present.
    pub fn remove(&self, key: &str) -> KeyStoreResult<bool> {
        let mut data = self.load()?;
        if data.remove(key).is_none() {
            return Ok(false);
        }
        self.save(&data)?;
        Ok(true)
    }
}
