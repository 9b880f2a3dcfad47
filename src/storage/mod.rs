//! Key/value storage adapters backing the dashboard state
//!
//! [`LocalStore`] is the durable, namespaced store every module persists
//! into; [`SessionStore`] is the volatile store scoped to the current
//! session, holding only the logged-in identity.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// Durable key/value store with write-through persistence.
///
/// Values are kept as raw JSON text under string keys and mirrored to a
/// single JSON file on every write, so a value is durable before the
/// setter returns. A stored value that fails to parse is treated as
/// absent instead of failing the whole load, so one corrupt key cannot
/// take down unrelated modules.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open the store at `path`, starting empty if the file does not
    /// exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(err) => {
                    warn!("store file {} is corrupt, starting empty: {err}", path.display());
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, entries })
    }

    /// Raw string stored under `key`, if any.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Deserialize the value stored under `key`.
    ///
    /// A missing or unparseable value yields `None`; parse failures are
    /// logged and otherwise silent, the caller falls back to its default.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.entries.get(key)?;
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("stored value under {key} is corrupt, treating as absent: {err}");
                None
            }
        }
    }

    /// Serialize `value` as JSON under `key` and persist immediately.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), Error> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, raw)
    }

    /// Store a raw string under `key` and persist immediately.
    pub fn set_raw(&mut self, key: &str, raw: impl Into<String>) -> Result<(), Error> {
        self.entries.insert(key.to_string(), raw.into());
        self.flush()
    }

    /// Remove `key` and persist immediately.
    pub fn remove(&mut self, key: &str) -> Result<(), Error> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    /// Parsed values for every key starting with `prefix`, excluding the
    /// keys listed in `exclude`. A raw value that is not valid JSON is
    /// passed through as a JSON string.
    pub fn scan(&self, prefix: &str, exclude: &[&str]) -> BTreeMap<String, Value> {
        self.entries
            .iter()
            .filter(|(key, _)| key.starts_with(prefix) && !exclude.contains(&key.as_str()))
            .map(|(key, raw)| (key.clone(), parse_or_string(raw)))
            .collect()
    }

    fn flush(&self) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Volatile key/value store scoped to the current session.
///
/// Cleared whenever the process ends; only the logged-in identity lives
/// here.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: BTreeMap<String, String>,
}

impl SessionStore {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize the value stored under `key`, treating corrupt values
    /// as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.entries.get(key)?;
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("session value under {key} is corrupt, treating as absent: {err}");
                None
            }
        }
    }

    /// Serialize `value` as JSON under `key`.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), Error> {
        let raw = serde_json::to_string(value)?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }

    /// Remove `key`.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Parse raw stored text as JSON, falling back to a JSON string for the
/// plain-text values the script endpoint occasionally stores.
pub(crate) fn parse_or_string(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
