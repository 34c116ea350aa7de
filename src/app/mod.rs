//! Application-level modules for the starter shell.
//!
//! This module contains the session state and the theme coordination glue.

mod app_state;
mod theme_coordinator;

pub use app_state::{AppState, ShellThemeController};
pub use theme_coordinator::ThemeCoordinator;
