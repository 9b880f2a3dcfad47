//! Registry of custom module storage keys swept by cloud sync
//!
//! Scheduling and calendar modules keep their collections under their own
//! storage keys rather than inside the state container. Each module
//! registers its key once at startup; the sync layer iterates the
//! registry, so the set of synced collections is enumerable and testable
//! instead of being discovered by pattern-matching key names.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::config::keys;
use crate::storage::{parse_or_string, LocalStore};

/// The set of custom module storage keys included in a sync snapshot.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    keys: BTreeSet<String>,
}

impl Default for ModuleRegistry {
    /// Registry preloaded with the keys of the built-in scheduling and
    /// calendar modules.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(keys::JADUAL_RELIEF);
        registry.register(keys::JADUAL_CLASS_TEACHERS);
        registry.register(keys::JADUAL_SPEECH);
        registry.register(keys::JADUAL_SLOTS);
        registry.register(keys::TAKWIM_SCHOOL_WEEKS);
        registry.register(keys::TAKWIM_EXAM_WEEKS);
        registry
    }
}

impl ModuleRegistry {
    /// Registry with no modules registered.
    pub fn empty() -> Self {
        Self { keys: BTreeSet::new() }
    }

    /// Register a module's storage key.
    ///
    /// The four keys already carried as explicit sync fields are refused,
    /// so they can never be double-encoded into the custom data sweep.
    pub fn register(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !keys::TRACKED.contains(&key.as_str()) {
            self.keys.insert(key);
        }
    }

    /// Whether `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Registered keys, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Read every registered collection out of `store`. Keys with no
    /// stored value are skipped; raw values that are not valid JSON pass
    /// through as JSON strings.
    pub fn sweep(&self, store: &LocalStore) -> BTreeMap<String, Value> {
        self.keys
            .iter()
            .filter_map(|key| {
                store
                    .get_raw(key)
                    .map(|raw| (key.clone(), parse_or_string(raw)))
            })
            .collect()
    }
}
