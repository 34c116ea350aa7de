//! Header navigation bar with the theme toggle.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Interactions produced by the header.
pub enum HeaderInteraction {
    ToggleThemeRequested,
}

/// Renders the navigation bar: app name on the left, theme toggle on the right.
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new(state.config.name).strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let preference = state.theme.preference();
            let next = preference.next();
            let response = ui.button(RichText::new(preference.icon()).size(18.0));
            if response.clicked() {
                interaction = Some(HeaderInteraction::ToggleThemeRequested);
            }
            response.on_hover_text(format!(
                "Theme: {} (click for {})",
                preference.label(),
                next.label()
            ));
        });
    });

    interaction
}
