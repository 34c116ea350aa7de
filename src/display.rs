//! Display surface the effective theme is applied to.

use crate::constants::animation;
use crate::theme::EffectiveTheme;

/// Root visual container that can be marked dark or not-dark.
///
/// Implementations must be idempotent: marking an already-dark surface dark
/// again changes nothing.
pub trait DisplaySurface {
    fn set_dark(&mut self, dark: bool);

    fn apply(&mut self, theme: EffectiveTheme) {
        self.set_dark(theme.is_dark());
    }
}

/// Applies themes to an egui context: base theme, palette and transition time.
#[derive(Clone)]
pub struct EguiSurface {
    ctx: egui::Context,
}

impl EguiSurface {
    pub fn new(ctx: egui::Context) -> Self {
        ctx.all_styles_mut(|style| {
            style.animation_time = animation::NORMAL.as_secs_f32();
        });
        Self { ctx }
    }
}

impl DisplaySurface for EguiSurface {
    fn set_dark(&mut self, dark: bool) {
        let theme = EffectiveTheme::from_dark(dark);
        let egui_theme: egui::Theme = theme.into();
        self.ctx.set_visuals_of(egui_theme, theme.palette().visuals(theme));
        // An explicit theme stops egui from following the system on its own.
        self.ctx.set_theme(egui_theme);
        self.ctx.request_repaint();
    }
}
