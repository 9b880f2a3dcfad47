//! e-Sekolah PINTAR Core Library
//!
//! State, persistence and cloud sync layer for the school administration
//! dashboard: the domain state container, the local key/value stores it
//! persists into, the spreadsheet sync client and the assistant client.
//! The presentation layer consumes this crate and never touches storage
//! directly.

pub mod assist;
pub mod config;
pub mod editor;
pub mod error;
pub mod notify;
pub mod registry;
pub mod state;
pub mod storage;
pub mod sync;

use std::path::Path;

use reqwest::Client;

use crate::assist::AssistClient;
use crate::config::DashboardOptions;
use crate::error::Error;
use crate::registry::ModuleRegistry;
use crate::state::AppState;
use crate::storage::{LocalStore, SessionStore};
use crate::sync::SyncClient;

/// The main entry point for the dashboard core
///
/// Constructed once at startup and injected into the presentation layer.
/// All mutation goes through [`AppState`]'s operations and the two sync
/// methods; nothing here is a global.
pub struct Dashboard {
    /// HTTP client shared by the sync and assistant clients
    pub http_client: Client,
    /// Domain state container
    pub state: AppState,
    /// Cloud sync client
    pub sync: SyncClient,
    /// Options the dashboard was opened with
    pub options: DashboardOptions,
}

impl Dashboard {
    /// Open the dashboard state persisted at `path` with default options.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use esekolah_pintar::Dashboard;
    ///
    /// let dashboard = Dashboard::open("data/smaam.json").unwrap();
    /// assert!(dashboard.state.permissions().kurikulum);
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::open_with_options(path, DashboardOptions::default())
    }

    /// Open the dashboard state persisted at `path` with custom options.
    pub fn open_with_options(
        path: impl AsRef<Path>,
        options: DashboardOptions,
    ) -> Result<Self, Error> {
        let store = LocalStore::open(path)?;
        let state = AppState::load(store, SessionStore::new(), ModuleRegistry::default(), &options);

        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            sync: SyncClient::new(http_client.clone()),
            http_client,
            state,
            options,
        })
    }

    /// Push the current snapshot to the configured script endpoint.
    pub async fn save_to_cloud(&mut self) -> Result<(), Error> {
        self.sync.push(&mut self.state).await
    }

    /// Pull the remote snapshot and merge it into the local state.
    pub async fn load_from_cloud(&mut self) -> Result<(), Error> {
        self.sync.pull(&mut self.state).await
    }

    /// Assistant client for the generative language API.
    pub fn assist(&self, api_key: &str) -> AssistClient {
        AssistClient::new(api_key, self.http_client.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::DashboardOptions;
    pub use crate::error::Error;
    pub use crate::state::{AppState, Role};
    pub use crate::Dashboard;
}
