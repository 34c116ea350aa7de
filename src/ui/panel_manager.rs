//! Panel layout management.

use eframe::egui;
use rstarter::constants::Breakpoint;

use crate::app::AppState;
use crate::ui::{header, status_bar};

/// Interactions from any panel, handled by the app after rendering.
pub enum PanelInteraction {
    ToggleTheme,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::ToggleThemeRequested) = header::render_header(ui, state) {
                interaction = Some(PanelInteraction::ToggleTheme);
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let breakpoint = Breakpoint::for_width(ctx.screen_rect().width());
        let content_frame = egui::Frame::central_panel(&ctx.style())
            .inner_margin(breakpoint.content_padding());

        egui::CentralPanel::default().frame(content_frame).show(ctx, |ui| {
            ui.heading(egui::RichText::new("Hello world!").size(30.0).strong());
        });

        interaction
    }
}
