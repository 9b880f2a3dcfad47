//! Domain entity types shared by the state container, storage and sync

use serde::{Deserialize, Deserializer, Serialize};

/// Role carried by a logged-in identity.
///
/// `AdminSistem` additionally manages module permissions and site
/// configuration; the distinction is enforced by the presentation layer,
/// not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    AdminSistem,
}

impl Role {
    /// Display name derived from the role at login.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Admin => "Admin Bertugas",
            Role::AdminSistem => "Admin Sistem",
        }
    }
}

/// The logged-in identity. Lives only in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub role: Role,
    pub name: String,
}

/// Per-module enabled flags. All eight modules are always present once
/// loaded; a partial stored object is discarded as corrupt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub pentadbiran: bool,
    pub kurikulum: bool,
    pub hem: bool,
    pub kokurikulum: bool,
    pub takwim: bool,
    pub program: bool,
    pub pengumuman: bool,
    pub laporan: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        Self {
            pentadbiran: true,
            kurikulum: true,
            hem: true,
            kokurikulum: true,
            takwim: true,
            program: true,
            pengumuman: true,
            laporan: true,
        }
    }
}

/// Site-wide configuration, including the sync endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub system_title: String,
    pub school_name: String,
    pub welcome_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_script_url: Option<String>,
}

/// Partial update applied over the current [`SiteConfig`]. Fields left as
/// `None` keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfigPatch {
    pub system_title: Option<String>,
    pub school_name: Option<String>,
    pub welcome_message: Option<String>,
    pub google_script_url: Option<String>,
}

/// Flat school profile record shown on the public profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolProfile {
    pub principal_name: String,
    pub principal_title: String,
    pub principal_image: String,
    pub principal_quote: String,
    pub school_code: String,
    pub school_address: String,
    pub school_email: String,
    pub school_phone: String,
    pub school_grade: String,
    pub student_count: String,
    pub teacher_count: String,
    pub mission: String,
    pub vision: String,
    pub motto: String,
    pub slogan: String,
    pub charter: String,
}

/// A public announcement. New items are shown first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub views: u32,
    pub likes: u32,
}

/// A school program or event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub title: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image2: Option<String>,
}

/// A teacher directory entry.
///
/// `classes` is canonically a list of class names. Legacy records stored
/// the list as one comma-joined string; that form is still accepted on
/// deserialization and normalized here, and is never written back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub subject: String,
    #[serde(deserialize_with = "classes_from_any")]
    pub classes: Vec<String>,
}

fn classes_from_any<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ClassList {
        Many(Vec<String>),
        Joined(String),
    }

    Ok(match ClassList::deserialize(deserializer)? {
        ClassList::Many(list) => list,
        ClassList::Joined(joined) => joined
            .split(',')
            .map(|class| class.trim().to_string())
            .filter(|class| !class.is_empty())
            .collect(),
    })
}

/// A student record, consumed by the assistant's report generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub grade: String,
    pub attendance: u32,
    pub average_score: u32,
    pub behavior_score: u32,
}
