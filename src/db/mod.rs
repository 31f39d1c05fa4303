//! Preference persistence. The browser build keeps the autoplay flag in
//! `localStorage`; other targets keep it in memory for the session.

use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

use crate::error::Result;
#[cfg(target_arch = "wasm32")]
use crate::error::PlayerError;

/// Key-value store holding the player's persisted preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read a boolean flag stored as `"true"`/`"false"`. Absent or any other
/// value reads as `false`.
pub fn load_flag<P: PreferenceStore + ?Sized>(store: &P, key: &str) -> bool {
    store.get(key).as_deref() == Some("true")
}

pub fn save_flag<P: PreferenceStore + ?Sized>(store: &mut P, key: &str, value: bool) -> Result<()> {
    store.set(key, if value { "true" } else { "false" })
}

/// Session-only store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    entries: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`, read and written as raw strings so values stay
/// compatible with pages that store the flag directly.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreferences;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| PlayerError::Storage(format!("{e:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformPreferences = LocalStoragePreferences;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformPreferences = MemoryPreferences;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flag_reads_false() {
        let store = MemoryPreferences::new();
        assert!(!load_flag(&store, "mp_autoplay_enabled"));
    }

    #[test]
    fn flag_round_trips_as_text() {
        let mut store = MemoryPreferences::new();
        save_flag(&mut store, "k", true).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("true"));
        assert!(load_flag(&store, "k"));

        save_flag(&mut store, "k", false).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("false"));
        assert!(!load_flag(&store, "k"));
    }

    #[test]
    fn unexpected_value_reads_false() {
        let store = MemoryPreferences::new().with_entry("k", "yes");
        assert!(!load_flag(&store, "k"));
    }
}
