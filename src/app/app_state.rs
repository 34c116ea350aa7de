//! Centralized application state for the starter shell.

use std::rc::Rc;

use rstarter::{AppConfig, EguiSurface, KeyValueStore, SchemeSignal, ThemeController};

/// Theme controller as wired up by the shell.
pub type ShellThemeController = ThemeController<Box<dyn KeyValueStore>, SchemeSignal, EguiSurface>;

/// State owned by the running window.
pub struct AppState {
    /// Theme preference, resolution and application
    pub theme: ShellThemeController,

    /// System color scheme, fed from egui every frame
    pub scheme: Rc<SchemeSignal>,

    /// Number of theme toggles in this session
    pub toggle_count: i64,

    /// Random id identifying this session in logs
    pub session_id: String,

    /// Day the session started (UTC)
    pub started_on: time::Date,

    pub config: &'static AppConfig,
}
