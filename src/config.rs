//! Application metadata and environment-driven configuration.

use once_cell::sync::Lazy;
use tracing::Level;

use crate::validation;

const API_BASE_URL_VAR: &str = "RSTARTER_API_BASE_URL";
const DEBUG_VAR: &str = "RSTARTER_DEBUG";
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// API endpoint paths, relative to [`AppConfig::api_base_url`].
pub mod endpoints {
    pub const AUTH: &str = "/auth";
    pub const USERS: &str = "/users";
    pub const POSTS: &str = "/posts";
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub api_base_url: String,
    pub debug_mode: bool,
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

impl AppConfig {
    /// Process-wide configuration, resolved from the environment on first use.
    pub fn global() -> &'static AppConfig {
        &CONFIG
    }

    /// Builds a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_BASE_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| {
                let valid = validation::is_url(url);
                if !valid {
                    tracing::warn!(url = %url, "ignoring invalid API base URL");
                }
                valid
            })
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let debug_mode = lookup(DEBUG_VAR)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            name: "Rust Starter Shell",
            version: env!("CARGO_PKG_VERSION"),
            description: "A minimal themed application shell",
            author: "rstarter contributors",
            api_base_url,
            debug_mode,
        }
    }

    /// Full URL of an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// Most verbose level logged: `DEBUG` in debug mode, `INFO` otherwise.
    pub fn log_level(&self) -> Level {
        if self.debug_mode {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Formatting subscriber capped at [`log_level`](Self::log_level).
    pub fn log_subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level())
            .finish()
    }

    /// Window title, e.g. `"Rust Starter Shell v0.1.0"`.
    pub fn window_title(&self) -> String {
        format!("{} v{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert!(!config.debug_mode);
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_env_overrides() {
        let config = config_with(&[
            ("RSTARTER_API_BASE_URL", "https://api.example.com/"),
            ("RSTARTER_DEBUG", "true"),
        ]);
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert!(config.debug_mode);
    }

    #[test]
    fn test_blank_url_falls_back() {
        let config = config_with(&[("RSTARTER_API_BASE_URL", "  ")]);
        assert_eq!(config.api_base_url, "http://localhost:3000");
    }

    #[test]
    fn test_non_http_url_falls_back() {
        let config = config_with(&[("RSTARTER_API_BASE_URL", "ftp://files.example.com")]);
        assert_eq!(config.api_base_url, "http://localhost:3000");
    }

    #[test]
    fn test_debug_mode_enables_debug_events() {
        let config = config_with(&[("RSTARTER_DEBUG", "1")]);
        assert_eq!(config.log_level(), Level::DEBUG);
        tracing::subscriber::with_default(config.log_subscriber(), || {
            assert!(tracing::enabled!(Level::DEBUG));
            assert!(!tracing::enabled!(Level::TRACE));
        });
    }

    #[test]
    fn test_default_mode_filters_debug_events() {
        let config = config_with(&[]);
        assert_eq!(config.log_level(), Level::INFO);
        tracing::subscriber::with_default(config.log_subscriber(), || {
            assert!(tracing::enabled!(Level::INFO));
            assert!(!tracing::enabled!(Level::DEBUG));
        });
    }

    #[test]
    fn test_endpoint_join() {
        let config = config_with(&[]);
        assert_eq!(config.endpoint(endpoints::USERS), "http://localhost:3000/users");
        assert_eq!(config.endpoint("posts"), "http://localhost:3000/posts");
    }
}
