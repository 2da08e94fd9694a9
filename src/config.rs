//! Builder configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::error::{Error, Result};
use crate::types::Transition;

/// Environment variable selecting the default transition.
pub const TRANSITION_VAR: &str = "SHOWQUEUE_TRANSITION";

/// Environment variable selecting compact JSON output.
pub const COMPACT_VAR: &str = "SHOWQUEUE_COMPACT";

/// Configuration for a presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The library name
    app_name: String,
    /// The library version
    app_version: String,
    /// Transition applied when a media item does not choose one
    pub default_transition: Transition,
    /// Emit pretty-printed JSON from `serialize`
    pub pretty: bool,
}

impl Config {
    /// Get the library name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the library version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            default_transition: Transition::Fade,
            pretty: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(TRANSITION_VAR) {
            config.default_transition = raw.parse::<Transition>().map_err(|e| {
                Error::config(
                    format!("{TRANSITION_VAR}: {e}"),
                    "Use one of: fade, slide, zoom, none",
                )
            })?;
        }

        if let Some(raw) = lookup(COMPACT_VAR) {
            config.pretty = !matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.default_transition, Transition::Fade);
        assert!(config.pretty);
        assert_eq!(config.app_name(), "showqueue");
    }

    #[test]
    fn reads_transition_and_compact() {
        let config =
            Config::from_lookup(lookup(&[(TRANSITION_VAR, "Slide"), (COMPACT_VAR, "true")])).unwrap();
        assert_eq!(config.default_transition, Transition::Slide);
        assert!(!config.pretty);
    }

    #[test]
    fn rejects_unknown_transition_with_hint() {
        let err = Config::from_lookup(lookup(&[(TRANSITION_VAR, "spin")])).unwrap_err();
        match err {
            Error::Config { message, hint } => {
                assert!(message.contains("spin"));
                assert!(hint.contains("fade"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
