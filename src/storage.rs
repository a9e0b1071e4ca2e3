//! Persistence for the two records that outlive a session: the slot
//! assignment and the display theme.
//!
//! Storage failures never propagate: a record that is missing, unreadable,
//! or the wrong shape loads as absent, and a failed write leaves the
//! in-memory state untouched. Both paths log a warning and move on.

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::board::SLOT_COUNT;

const PLACEMENT_KEY: &str = "power_rankings.order.v1";
const THEME_KEY: &str = "power_rankings.theme";

/// Durable string storage keyed by name. The app runs against
/// [`LocalStore`]; tests substitute [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage` backend.
pub struct LocalStore;

impl LocalStore {
    fn available() -> bool {
        web_sys::window().is_some_and(|window| matches!(window.local_storage(), Ok(Some(_))))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        if !Self::available() {
            return None;
        }
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if !Self::available() {
            warn!("local storage unavailable, {key} not persisted");
            return;
        }
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            warn!("failed to persist {key}: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if Self::available() {
            LocalStorage::delete(key);
        }
    }
}

/// In-memory stand-in used by unit tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Persisted slot assignment: one entry per rank, empty string for an open
/// slot. Stored as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredPlacement(pub Vec<String>);

impl StoredPlacement {
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == SLOT_COUNT
    }
}

pub fn load_placement<S: KeyValueStore>(store: &S) -> Option<StoredPlacement> {
    let raw = store.get(PLACEMENT_KEY)?;
    let placement: StoredPlacement = match serde_json::from_str(&raw) {
        Ok(placement) => placement,
        Err(err) => {
            warn!("discarding unreadable placement record: {err}");
            return None;
        }
    };
    if !placement.is_well_formed() {
        warn!(
            "discarding placement record with {} slots, expected {SLOT_COUNT}",
            placement.0.len()
        );
        return None;
    }
    Some(placement)
}

pub fn save_placement<S: KeyValueStore>(store: &S, placement: &StoredPlacement) {
    match serde_json::to_string(placement) {
        Ok(json) => store.set(PLACEMENT_KEY, &json),
        Err(err) => warn!("failed to encode placement record: {err}"),
    }
}

pub fn clear_placement<S: KeyValueStore>(store: &S) {
    store.remove(PLACEMENT_KEY);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Any missing or unrecognized stored value falls back to dark.
pub fn load_theme<S: KeyValueStore>(store: &S) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

pub fn save_theme<S: KeyValueStore>(store: &S, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}
