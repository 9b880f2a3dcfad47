//! Cloud sync client for the spreadsheet-backed script endpoint
//!
//! Two operations: [`push`](SyncClient::push) uploads a full snapshot of
//! the dashboard state, [`pull`](SyncClient::pull) downloads whatever the
//! endpoint holds and merges it field by field. Both fail fast when no
//! endpoint URL is configured, before any request is made.

mod types;

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

use crate::error::Error;
use crate::state::AppState;

pub use types::{RemoteData, SaveRequest, Snapshot, SyncResponse};

const MSG_SAVING: &str = "Sedang menyimpan semua data ke Cloud...";
const MSG_LOADING: &str = "Sedang memuat turun data...";
const MSG_SAVE_OK: &str = "✅ Berjaya disimpan di Google Sheet!";
const MSG_LOAD_OK: &str = "✅ Data berjaya dimuat turun!";
const MSG_SAVE_ERR_PREFIX: &str = "⚠️ Ralat: ";
const MSG_LOAD_EMPTY: &str = "⚠️ Tiada data dijumpai atau ralat server.";
const MSG_SAVE_NETWORK: &str = "❌ Gagal menyambung ke server.";
const MSG_LOAD_NETWORK: &str = "❌ Gagal memuat turun data.";

/// Client for the remote spreadsheet endpoint.
///
/// The script endpoint is not a conventional JSON API: the push body goes
/// out as `text/plain` so the request stays a CORS simple request and no
/// pre-flight is issued.
#[derive(Debug)]
pub struct SyncClient {
    http_client: Client,
    syncing: bool,
}

impl SyncClient {
    /// Create a sync client over a shared HTTP client.
    pub fn new(http_client: Client) -> Self {
        Self {
            http_client,
            syncing: false,
        }
    }

    /// Whether a push or pull is currently in flight. Presentation code
    /// uses this to disable the sync buttons and show a spinner.
    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    /// Upload the full state snapshot with `action: "save"`.
    ///
    /// On any failure the local state is left untouched; the outcome is
    /// always surfaced through the notification channel as well as the
    /// returned result.
    pub async fn push(&mut self, state: &mut AppState) -> Result<(), Error> {
        let endpoint = endpoint(state)?;
        if self.syncing {
            return Err(Error::SyncBusy);
        }
        self.syncing = true;
        state.notify(MSG_SAVING);

        let result = self.push_inner(&endpoint, state).await;
        self.syncing = false;

        match &result {
            Ok(()) => state.notify(MSG_SAVE_OK),
            Err(Error::Sync(message)) => state.notify(format!("{MSG_SAVE_ERR_PREFIX}{message}")),
            Err(_) => state.notify(MSG_SAVE_NETWORK),
        }
        result
    }

    async fn push_inner(&self, endpoint: &str, state: &AppState) -> Result<(), Error> {
        let request = SaveRequest {
            action: "save",
            data: Snapshot {
                permissions: state.permissions().clone(),
                site_config: state.site_config().clone(),
                announcements: state.announcements().to_vec(),
                programs: state.programs().to_vec(),
                teachers: state.teachers().to_vec(),
                school_profile: state.school_profile().clone(),
                custom_data: state.custom_data(),
            },
        };
        let body = serde_json::to_string(&request)?;
        debug!("pushing snapshot to {endpoint} ({} bytes)", body.len());

        let response = self
            .http_client
            .post(endpoint)
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await?;
        let reply: SyncResponse = response.json().await?;

        if reply.status == "success" {
            Ok(())
        } else {
            Err(Error::sync(reply.message.unwrap_or(reply.status)))
        }
    }

    /// Download the remote snapshot with `action=read` and merge it into
    /// `state`.
    ///
    /// Only fields present in the response overwrite the local entities;
    /// the endpoint URL itself is never taken from the remote payload.
    pub async fn pull(&mut self, state: &mut AppState) -> Result<(), Error> {
        let endpoint = endpoint(state)?;
        if self.syncing {
            return Err(Error::SyncBusy);
        }
        self.syncing = true;
        state.notify(MSG_LOADING);

        let result = self.pull_inner(&endpoint, state).await;
        self.syncing = false;

        match &result {
            Ok(()) => state.notify(MSG_LOAD_OK),
            Err(Error::Sync(_)) => state.notify(MSG_LOAD_EMPTY),
            Err(_) => state.notify(MSG_LOAD_NETWORK),
        }
        result
    }

    async fn pull_inner(&self, endpoint: &str, state: &mut AppState) -> Result<(), Error> {
        let mut url = Url::parse(endpoint)?;
        url.query_pairs_mut().append_pair("action", "read");
        debug!("pulling snapshot from {url}");

        let response = self.http_client.get(url).send().await?;
        let reply: SyncResponse = response.json().await?;

        let data = match reply.data {
            Some(data) if reply.status == "success" => data,
            _ => return Err(Error::sync(reply.message.unwrap_or(reply.status))),
        };

        if let Some(permissions) = data.permissions {
            state.restore_permissions(permissions)?;
        }
        if let Some(config) = data.site_config {
            state.restore_site_config(config)?;
        }
        if let Some(list) = data.announcements {
            state.restore_announcements(list);
        }
        if let Some(list) = data.programs {
            state.restore_programs(list);
        }
        if let Some(list) = data.teachers {
            state.restore_teachers(list)?;
        }
        if let Some(profile) = data.school_profile {
            state.restore_school_profile(profile)?;
        }
        if let Some(custom) = data.custom_data {
            state.restore_custom(custom)?;
        }
        Ok(())
    }
}

/// The resolved endpoint URL, or a blocking precondition error when none
/// is configured.
fn endpoint(state: &AppState) -> Result<String, Error> {
    match state.site_config().google_script_url.as_deref() {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err(Error::MissingEndpoint),
    }
}
