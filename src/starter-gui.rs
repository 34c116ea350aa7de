//! Starter shell GUI application
//!
//! A single window with a navigation bar holding a light/dark/system theme
//! toggle. The theme preference is persisted between sessions and the
//! `system` preference follows the operating system's color scheme live.
//!
//! The application is built with a modular architecture:
//! - `app/` - Session state and theme coordination
//! - `ui/` - Panel rendering and interaction

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod ui;

use app::{AppState, ThemeCoordinator};
use rstarter::AppConfig;
use tracing_subscriber::util::SubscriberInitExt;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes logging and launches the shell.
fn main() -> eframe::Result {
    let config = AppConfig::global();
    config.log_subscriber().init();

    if config.debug_mode {
        tracing::debug!(?config, "app configuration");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title(config.window_title()),
        ..Default::default()
    };

    eframe::run_native(
        config.name,
        options,
        Box::new(|cc| Ok(Box::new(StarterApp::new(cc)))),
    )
}

/// The starter shell application.
///
/// Dropping it tears down the theme controller, which stops listening for
/// system color scheme changes.
struct StarterApp {
    state: AppState,
}

impl StarterApp {
    fn new(cc: &eframe::CreationContext) -> Self {
        Self {
            state: ThemeCoordinator::create_state(&cc.egui_ctx),
        }
    }
}

impl eframe::App for StarterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::observe_system_scheme(ctx, &self.state);

        if let Some(PanelInteraction::ToggleTheme) = PanelManager::render_all_panels(ctx, &self.state) {
            ThemeCoordinator::toggle_theme(&mut self.state);
        }
    }
}
