//! App-wide constants.
//!
//! Theme names, storage keys, layout breakpoints and animation timings live
//! here so the storage layer, the controller and the GUI agree on them.

use std::time::Duration;

/// Persisted names of the three theme preferences.
pub mod themes {
    pub const LIGHT: &str = "light";
    pub const DARK: &str = "dark";
    pub const SYSTEM: &str = "system";

    /// All valid persisted values, in toggle order.
    pub const ALL: [&str; 3] = [LIGHT, DARK, SYSTEM];
}

/// Namespaced keys in the key-value store.
pub mod storage_keys {
    /// Theme preference (`"light"`, `"dark"` or `"system"`, JSON encoded)
    pub const THEME: &str = "theme-preference";
    pub const USER_PREFERENCES: &str = "user-preferences";
    pub const APP_STATE: &str = "app-state";
    pub const SETTINGS: &str = "app-settings";
}

/// Responsive layout breakpoints, matching the usual Tailwind defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// Minimum width in logical pixels at which this breakpoint applies.
    pub const fn min_width(self) -> f32 {
        match self {
            Breakpoint::Xs => 0.0,
            Breakpoint::Sm => 640.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 1024.0,
            Breakpoint::Xl => 1280.0,
            Breakpoint::Xxl => 1536.0,
        }
    }

    /// Largest breakpoint whose minimum width fits in `width`.
    pub fn for_width(width: f32) -> Self {
        [
            Breakpoint::Xxl,
            Breakpoint::Xl,
            Breakpoint::Lg,
            Breakpoint::Md,
            Breakpoint::Sm,
        ]
        .into_iter()
        .find(|bp| width >= bp.min_width())
        .unwrap_or(Breakpoint::Xs)
    }

    /// Content padding used by the shell at this breakpoint.
    pub fn content_padding(self) -> f32 {
        match self {
            Breakpoint::Xs | Breakpoint::Sm => 16.0,
            Breakpoint::Md | Breakpoint::Lg => 24.0,
            Breakpoint::Xl | Breakpoint::Xxl => 32.0,
        }
    }
}

/// Standard transition durations.
pub mod animation {
    use super::Duration;

    /// Hover effects and other quick interactions
    pub const FAST: Duration = Duration::from_millis(150);
    /// Theme changes, modals
    pub const NORMAL: Duration = Duration::from_millis(300);
    /// Page transitions
    pub const SLOW: Duration = Duration::from_millis(500);
}

/// HTTP status codes the starter's API helpers care about.
pub mod http_status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// User-facing error messages.
pub mod error_messages {
    pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";
    pub const UNAUTHORIZED: &str = "You are not authorized to perform this action.";
    pub const NOT_FOUND: &str = "The requested resource was not found.";
    pub const VALIDATION_ERROR: &str = "Please check your input and try again.";
    pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

    /// Picks the message shown for an HTTP status code.
    pub fn for_status(status: u16) -> &'static str {
        use super::http_status;

        match status {
            http_status::BAD_REQUEST => VALIDATION_ERROR,
            http_status::UNAUTHORIZED | http_status::FORBIDDEN => UNAUTHORIZED,
            http_status::NOT_FOUND => NOT_FOUND,
            _ => GENERIC_ERROR,
        }
    }
}
