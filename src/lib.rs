pub mod config;
pub mod constants;
pub mod controller;
pub mod display;
pub mod error;
pub mod preference_store;
pub mod scheme;
pub mod storage;
pub mod theme;
pub mod utils;
pub mod validation;

// Export configuration
pub use config::AppConfig;

// Export persistence
pub use error::StorageError;
pub use preference_store::PreferenceStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

// Export theme support
pub use controller::ThemeController;
pub use display::{DisplaySurface, EguiSurface};
pub use scheme::{ColorSchemeSource, SchemeSignal, Subscription};
pub use theme::{EffectiveTheme, InvalidTheme, Palette, ThemePreference};
