//! Domain state container
//!
//! Single source of truth for the dashboard's entities. Every mutator
//! updates the in-memory state, write-through persists entities that own
//! a storage key, and surfaces a confirmation through the notification
//! channel. Views read through the accessors and never touch storage for
//! these entities directly.

pub mod defaults;
mod types;

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::config::{keys, DashboardOptions, DEFAULT_SCRIPT_URL, STALE_SCRIPT_URL_FRAGMENT};
use crate::error::Error;
use crate::notify::Notifier;
use crate::registry::ModuleRegistry;
use crate::storage::{LocalStore, SessionStore};

pub use types::{
    Announcement, Identity, Permissions, Program, Role, SchoolProfile, SiteConfig,
    SiteConfigPatch, Student, Teacher,
};

/// Milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_millis() as u64
}

/// Mint a record id from the current time, matching the ids the web
/// client generates. Uniqueness is by convention only; two ids minted
/// within the same millisecond collide.
pub fn next_id() -> i64 {
    now_millis() as i64
}

/// The domain state container.
///
/// Owns the two store adapters, the notification channel and the module
/// registry. Constructed once at startup and passed by reference to every
/// consumer; there are no ambient globals.
#[derive(Debug)]
pub struct AppState {
    store: LocalStore,
    session: SessionStore,
    notifier: Notifier,
    registry: ModuleRegistry,

    user: Option<Identity>,
    permissions: Permissions,
    site_config: SiteConfig,
    school_profile: SchoolProfile,
    announcements: Vec<Announcement>,
    programs: Vec<Program>,
    teachers: Vec<Teacher>,
    active_view: String,
    last_sync_time: u64,
}

impl AppState {
    /// Build the container from its collaborators, loading every
    /// persisted entity and falling back to the shipped defaults per key.
    ///
    /// A stored site config with no endpoint URL, or one still pointing
    /// at the retired deployment, is migrated to the current default.
    pub fn load(
        store: LocalStore,
        session: SessionStore,
        registry: ModuleRegistry,
        options: &DashboardOptions,
    ) -> Self {
        let permissions = store.get(keys::PERMISSIONS).unwrap_or_default();

        let mut site_config: SiteConfig =
            store.get(keys::SITE_CONFIG).unwrap_or_else(defaults::site_config);
        let stale = match site_config.google_script_url.as_deref() {
            None | Some("") => true,
            Some(url) => url.contains(STALE_SCRIPT_URL_FRAGMENT),
        };
        if stale {
            site_config.google_script_url = Some(DEFAULT_SCRIPT_URL.to_string());
        }

        let teachers = store.get(keys::TEACHERS).unwrap_or_else(defaults::teachers);
        let school_profile = store
            .get(keys::SCHOOL_PROFILE)
            .unwrap_or_else(defaults::school_profile);
        let user = session.get(keys::SESSION_USER);

        Self {
            store,
            session,
            notifier: Notifier::new(options.notice_ttl),
            registry,
            user,
            permissions,
            site_config,
            school_profile,
            announcements: defaults::announcements(),
            programs: defaults::programs(),
            teachers,
            active_view: "Dashboard".to_string(),
            last_sync_time: now_millis(),
        }
    }

    // --- Accessors ---

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn permissions(&self) -> &Permissions {
        &self.permissions
    }

    pub fn site_config(&self) -> &SiteConfig {
        &self.site_config
    }

    pub fn school_profile(&self) -> &SchoolProfile {
        &self.school_profile
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Tag of the view currently shown.
    pub fn active_view(&self) -> &str {
        &self.active_view
    }

    /// Generation marker bumped whenever a pull rewrites storage behind
    /// the custom modules' backs. Views holding module data reload from
    /// the store when this changes.
    pub fn last_sync_time(&self) -> u64 {
        self.last_sync_time
    }

    /// The currently visible notification, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notifier.current()
    }

    /// The persistent store. Custom modules keep their own collections
    /// here under registered keys.
    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Mutable access to the persistent store for custom modules.
    pub fn store_mut(&mut self) -> &mut LocalStore {
        &mut self.store
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Register another custom module key for syncing.
    pub fn register_module(&mut self, key: impl Into<String>) {
        self.registry.register(key);
    }

    // --- Mutators ---

    /// Show a transient notification.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notifier.show(message);
    }

    pub fn set_active_view(&mut self, view: impl Into<String>) {
        self.active_view = view.into();
    }

    /// Record a login. No credentials are checked; the caller supplies
    /// the role and the display name is derived from it.
    pub fn login(&mut self, username: &str, role: Role) -> Result<(), Error> {
        let user = Identity {
            username: username.to_string(),
            role,
            name: role.display_name().to_string(),
        };
        self.session.set(keys::SESSION_USER, &user)?;
        self.notifier.show(format!("Selamat datang, {}", user.name));
        self.user = Some(user);
        Ok(())
    }

    /// Clear the identity, drop the session key and return to the
    /// default view.
    pub fn logout(&mut self) {
        self.user = None;
        self.session.remove(keys::SESSION_USER);
        self.active_view = "Dashboard".to_string();
        self.notifier.show("Log keluar berjaya");
    }

    pub fn update_permissions(&mut self, new: Permissions) -> Result<(), Error> {
        self.store.set(keys::PERMISSIONS, &new)?;
        self.permissions = new;
        Ok(())
    }

    /// Merge a partial update over the current site config and persist
    /// the result.
    pub fn update_site_config(&mut self, patch: SiteConfigPatch) -> Result<(), Error> {
        let mut config = self.site_config.clone();
        if let Some(value) = patch.system_title {
            config.system_title = value;
        }
        if let Some(value) = patch.school_name {
            config.school_name = value;
        }
        if let Some(value) = patch.welcome_message {
            config.welcome_message = value;
        }
        if let Some(value) = patch.google_script_url {
            config.google_script_url = Some(value);
        }
        self.store.set(keys::SITE_CONFIG, &config)?;
        self.site_config = config;
        Ok(())
    }

    pub fn update_school_profile(&mut self, profile: SchoolProfile) -> Result<(), Error> {
        self.store.set(keys::SCHOOL_PROFILE, &profile)?;
        self.school_profile = profile;
        self.notifier.show("Profil sekolah dikemaskini");
        Ok(())
    }

    /// Prepend an announcement so the newest shows first.
    pub fn add_announcement(&mut self, item: Announcement) {
        self.announcements.insert(0, item);
        self.notifier.show("Pengumuman ditambah");
    }

    pub fn update_announcement(&mut self, updated: Announcement) {
        if let Some(slot) = self.announcements.iter_mut().find(|a| a.id == updated.id) {
            *slot = updated;
        }
        self.notifier.show("Pengumuman dikemaskini");
    }

    pub fn delete_announcement(&mut self, id: i64) {
        self.announcements.retain(|a| a.id != id);
        self.notifier.show("Pengumuman dipadam");
    }

    /// Prepend a program so the newest shows first.
    pub fn add_program(&mut self, item: Program) {
        self.programs.insert(0, item);
        self.notifier.show("Program ditambah");
    }

    pub fn update_program(&mut self, updated: Program) {
        if let Some(slot) = self.programs.iter_mut().find(|p| p.id == updated.id) {
            *slot = updated;
        }
        self.notifier.show("Program dikemaskini");
    }

    pub fn delete_program(&mut self, id: i64) {
        self.programs.retain(|p| p.id != id);
        self.notifier.show("Program dipadam");
    }

    /// Append a teacher to the directory. Unlike announcements and
    /// programs the directory keeps insertion order oldest-first.
    pub fn add_teacher(&mut self, teacher: Teacher) -> Result<(), Error> {
        self.teachers.push(teacher);
        self.persist_teachers()?;
        self.notifier.show("Guru ditambah");
        Ok(())
    }

    pub fn update_teacher(&mut self, updated: Teacher) -> Result<(), Error> {
        if let Some(slot) = self.teachers.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
        self.persist_teachers()?;
        self.notifier.show("Maklumat guru dikemaskini");
        Ok(())
    }

    pub fn delete_teacher(&mut self, id: &str) -> Result<(), Error> {
        self.teachers.retain(|t| t.id != id);
        self.persist_teachers()?;
        self.notifier.show("Rekod guru dipadam");
        Ok(())
    }

    fn persist_teachers(&mut self) -> Result<(), Error> {
        self.store.set(keys::TEACHERS, &self.teachers)
    }

    // --- Sync support ---

    /// Snapshot of every registered custom module collection.
    pub(crate) fn custom_data(&self) -> BTreeMap<String, Value> {
        self.registry.sweep(&self.store)
    }

    /// Bump the generation marker past both the clock and its previous
    /// value.
    pub(crate) fn mark_external_update(&mut self) {
        self.last_sync_time = now_millis().max(self.last_sync_time + 1);
    }

    pub(crate) fn restore_permissions(&mut self, permissions: Permissions) -> Result<(), Error> {
        self.store.set(keys::PERMISSIONS, &permissions)?;
        self.permissions = permissions;
        Ok(())
    }

    /// Overwrite the site config from a remote snapshot. The local
    /// endpoint URL always wins, so a sync endpoint can never redirect
    /// itself.
    pub(crate) fn restore_site_config(&mut self, mut config: SiteConfig) -> Result<(), Error> {
        config.google_script_url = self.site_config.google_script_url.clone();
        self.store.set(keys::SITE_CONFIG, &config)?;
        self.site_config = config;
        Ok(())
    }

    pub(crate) fn restore_announcements(&mut self, list: Vec<Announcement>) {
        self.announcements = list;
    }

    pub(crate) fn restore_programs(&mut self, list: Vec<Program>) {
        self.programs = list;
    }

    pub(crate) fn restore_teachers(&mut self, list: Vec<Teacher>) -> Result<(), Error> {
        self.teachers = list;
        self.persist_teachers()
    }

    pub(crate) fn restore_school_profile(&mut self, profile: SchoolProfile) -> Result<(), Error> {
        self.store.set(keys::SCHOOL_PROFILE, &profile)?;
        self.school_profile = profile;
        Ok(())
    }

    /// Write remote custom module collections back verbatim: strings as
    /// raw text, everything else re-encoded as JSON. Unknown keys are
    /// registered so the next push includes them, and the generation
    /// marker is bumped so module views reload from the store.
    pub(crate) fn restore_custom(&mut self, entries: BTreeMap<String, Value>) -> Result<(), Error> {
        for (key, value) in entries {
            match value {
                Value::String(raw) => self.store.set_raw(&key, raw)?,
                other => self.store.set_raw(&key, other.to_string())?,
            }
            self.registry.register(key);
        }
        self.mark_external_update();
        Ok(())
    }
}
