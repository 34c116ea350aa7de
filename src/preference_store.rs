//! Persistence of the theme preference.
//!
//! Reads never fail: a missing, unreadable or out-of-range value yields
//! [`ThemePreference::System`]. Writes report success as a boolean.

use crate::constants::storage_keys;
use crate::scheme::ColorSchemeSource;
use crate::storage::{self, KeyValueStore};
use crate::theme::{EffectiveTheme, ThemePreference};

/// Stores a single [`ThemePreference`] under [`storage_keys::THEME`].
#[derive(Debug)]
pub struct PreferenceStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Stored preference, or `System` when nothing valid is stored.
    pub fn get_stored_theme(&self) -> ThemePreference {
        storage::try_get_item(&self.backend, storage_keys::THEME).unwrap_or_default()
    }

    /// Persists `pref`. On failure the previously stored value is kept.
    pub fn set_stored_theme(&mut self, pref: ThemePreference) -> bool {
        storage::set_item(&mut self.backend, storage_keys::THEME, &pref)
    }

    /// Persists an untyped preference name, rejecting anything but
    /// `"light"`, `"dark"` and `"system"` without writing.
    pub fn set_stored_theme_str(&mut self, raw: &str) -> bool {
        match raw.parse::<ThemePreference>() {
            Ok(pref) => self.set_stored_theme(pref),
            Err(err) => {
                tracing::warn!(error = %err, "rejecting theme preference");
                false
            }
        }
    }

    /// Resolves the stored preference against the live system signal.
    pub fn effective_theme(&self, scheme: &dyn ColorSchemeSource) -> EffectiveTheme {
        self.get_stored_theme().resolve(scheme.system_theme())
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }
}
