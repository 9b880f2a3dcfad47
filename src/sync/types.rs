//! Wire types exchanged with the spreadsheet script endpoint

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::{Announcement, Permissions, Program, SchoolProfile, SiteConfig, Teacher};

/// Envelope POSTed to the script endpoint by a push.
#[derive(Debug, Serialize)]
pub struct SaveRequest {
    pub action: &'static str,
    pub data: Snapshot,
}

/// Full snapshot of the synced state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub permissions: Permissions,
    pub site_config: SiteConfig,
    pub announcements: Vec<Announcement>,
    pub programs: Vec<Program>,
    pub teachers: Vec<Teacher>,
    pub school_profile: SchoolProfile,
    pub custom_data: BTreeMap<String, Value>,
}

/// Response returned by the endpoint for both actions.
#[derive(Debug, Deserialize)]
pub struct SyncResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<RemoteData>,
}

/// Partial state returned by a read.
///
/// A field absent from the response leaves the local entity untouched; a
/// present field overwrites it, even when the collection is empty.
/// Presence, not truthiness, gates the overwrite.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteData {
    #[serde(default)]
    pub permissions: Option<Permissions>,
    #[serde(default)]
    pub site_config: Option<SiteConfig>,
    #[serde(default)]
    pub announcements: Option<Vec<Announcement>>,
    #[serde(default)]
    pub programs: Option<Vec<Program>>,
    #[serde(default)]
    pub teachers: Option<Vec<Teacher>>,
    #[serde(default)]
    pub school_profile: Option<SchoolProfile>,
    #[serde(default)]
    pub custom_data: Option<BTreeMap<String, Value>>,
}
