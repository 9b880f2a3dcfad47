//! Configuration options and baked-in defaults for the dashboard core

use std::time::Duration;

/// Google Apps Script endpoint used when a stored config carries no URL,
/// or still points at a retired deployment.
pub const DEFAULT_SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbxZRbQndRE48rCgUpEHjGqBXr_rBd8vWyD4KHbCVW-TXifbk42FfRGPGuzbs9FuRl6gSg/exec";

/// Deployment id fragment of the retired script endpoint. Stored configs
/// containing it are migrated to [`DEFAULT_SCRIPT_URL`] at load time.
pub const STALE_SCRIPT_URL_FRAGMENT: &str = "AKfycbxpzq6lpFYRe7QQ6lGF7J";

/// Namespace prefix shared by every persisted key
pub const KEY_PREFIX: &str = "smaam_";

/// Storage keys owned by the dashboard modules
pub mod keys {
    /// Module permission flags
    pub const PERMISSIONS: &str = "smaam_permissions";
    /// Site configuration, including the sync endpoint URL
    pub const SITE_CONFIG: &str = "smaam_config";
    /// Teacher directory
    pub const TEACHERS: &str = "smaam_teachers";
    /// School profile record
    pub const SCHOOL_PROFILE: &str = "smaam_school_profile";
    /// Session-scoped key holding the logged-in identity
    pub const SESSION_USER: &str = "smaam_user";

    /// Relief teacher schedule rows
    pub const JADUAL_RELIEF: &str = "smaam_jadual_relief";
    /// Class teacher assignment rows
    pub const JADUAL_CLASS_TEACHERS: &str = "smaam_jadual_classTeachers";
    /// Assembly speech schedule rows
    pub const JADUAL_SPEECH: &str = "smaam_jadual_speech";
    /// Timetable slot map, personal and per-class
    pub const JADUAL_SLOTS: &str = "smaam_jadual_slots";
    /// Academic calendar week rows
    pub const TAKWIM_SCHOOL_WEEKS: &str = "smaam_takwim_schoolWeeks";
    /// Exam week rows
    pub const TAKWIM_EXAM_WEEKS: &str = "smaam_takwim_examWeeks";

    /// Keys the sync payload carries as explicit top-level fields. The
    /// custom data sweep must never include them.
    pub const TRACKED: [&str; 4] = [PERMISSIONS, SITE_CONFIG, TEACHERS, SCHOOL_PROFILE];
}

/// Configuration options for [`Dashboard`](crate::Dashboard)
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// How long a notification stays visible before it expires
    pub notice_ttl: Duration,

    /// The request timeout applied to sync and assistant calls
    pub request_timeout: Option<Duration>,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            notice_ttl: Duration::from_secs(3),
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl DashboardOptions {
    /// Set how long a notification stays visible
    pub fn with_notice_ttl(mut self, value: Duration) -> Self {
        self.notice_ttl = value;
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }
}
