//! Status bar UI rendering
//!
//! Shows the active preference, the effective theme and session info.

use eframe::egui;
use egui::RichText;
use rstarter::utils::{capitalize, format_date, format_number, truncate, DateStyle};

use crate::app::AppState;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let effective = state.theme.effective_theme();
        let effective_name = if effective.is_dark() { "dark" } else { "light" };
        let theme_text = format!(
            "Theme: {} | Showing: {}",
            state.theme.preference().label(),
            capitalize(effective_name)
        );
        ui.label(RichText::new(theme_text).strong());

        ui.label(RichText::new("|").strong());
        ui.label(format!("Toggles: {}", format_number(state.toggle_count)));
        ui.label(RichText::new("|").strong());
        ui.label(format!("Since {}", format_date(state.started_on, DateStyle::Medium)));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("v{}", state.config.version));
            ui.weak(truncate(state.config.description, 40, "…"));
        });
    });
}
