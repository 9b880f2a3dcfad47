//! Error handling for the e-Sekolah PINTAR core library

use std::fmt;
use thiserror::Error;

/// Unified error type for the dashboard core
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors reading or writing the local store file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A sync operation was attempted before a script endpoint URL was
    /// configured. The message doubles as the blocking alert shown to the
    /// user.
    #[error("Sila tetapkan URL Google Apps Script di Tetapan Admin dahulu.")]
    MissingEndpoint,

    /// A push or pull is already in flight
    #[error("a sync operation is already in progress")]
    SyncBusy,

    /// The script endpoint answered with a non-success status
    #[error("Sync error: {0}")]
    Sync(String),

    /// Assistant errors, carrying the localized message shown to the user
    #[error("{0}")]
    Assist(String),
}

impl Error {
    /// Create a new sync error
    pub fn sync<T: fmt::Display>(msg: T) -> Self {
        Error::Sync(msg.to_string())
    }

    /// Create a new assistant error
    pub fn assist<T: fmt::Display>(msg: T) -> Self {
        Error::Assist(msg.to_string())
    }
}
