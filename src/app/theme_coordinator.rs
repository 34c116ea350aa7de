//! Theme wiring between egui, the preference store and the controller.

use std::rc::Rc;

use anyhow::Context as _;
use rstarter::utils::generate_id;
use rstarter::{
    AppConfig, EguiSurface, FileStore, KeyValueStore, MemoryStore, PreferenceStore, SchemeSignal,
    ThemeController,
};

use crate::app::AppState;

/// Coordinates theme setup, per-frame system scheme updates and toggles.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Builds the session state and applies the stored theme.
    pub fn create_state(ctx: &egui::Context) -> AppState {
        let session_id = generate_id(8);
        let config = AppConfig::global();

        let backend: Box<dyn KeyValueStore> = match Self::open_file_store() {
            Ok(store) => {
                tracing::info!(path = %store.path().display(), "using file storage");
                Box::new(store)
            }
            Err(err) => {
                tracing::warn!(error = %err, "preferences will not persist across sessions");
                Box::new(MemoryStore::new())
            }
        };

        let scheme = Rc::new(SchemeSignal::headless());
        scheme.observe(ctx);

        let mut theme = ThemeController::new(
            PreferenceStore::new(backend),
            Rc::clone(&scheme),
            EguiSurface::new(ctx.clone()),
        );
        theme.initialize();

        AppState {
            theme,
            scheme,
            toggle_count: 0,
            session_id,
            started_on: time::OffsetDateTime::now_utc().date(),
            config,
        }
    }

    fn open_file_store() -> anyhow::Result<FileStore> {
        let path = FileStore::default_path().context("no configuration directory on this platform")?;
        Ok(FileStore::open(path))
    }

    /// Forwards this frame's system theme; listeners fire only on change.
    pub fn observe_system_scheme(ctx: &egui::Context, state: &AppState) {
        state.scheme.observe(ctx);
    }

    /// Handles a click on the theme toggle.
    pub fn toggle_theme(state: &mut AppState) {
        let preference = state.theme.toggle();
        state.toggle_count += 1;
        tracing::info!(
            session = %state.session_id,
            %preference,
            effective = ?state.theme.applied(),
            "theme toggled"
        );
    }
}
