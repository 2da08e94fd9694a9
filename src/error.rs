//! Library error types.
//!
//! Builder operations never fail; rejected inputs are reported as
//! [`crate::diagnostics::Diagnostic`]s instead. This type covers the few
//! fallible edges: JSON emission and configuration loading.

use thiserror::Error;

/// Library result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Library error types with context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("bad transition `spin`", "Use one of: fade, slide, zoom, none");
        let text = err.to_string();
        assert!(text.contains("spin"));
        assert!(text.contains("fade, slide, zoom, none"));
    }

    #[test]
    fn serde_errors_convert() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = source.into();
        assert!(matches!(err, Error::Serialize(_)));
    }

    #[test]
    fn variants_are_serialize_and_config_only() {
        let errors = [
            Error::from(serde_json::from_str::<serde_json::Value>("[").unwrap_err()),
            Error::config("missing", "set it"),
        ];
        for err in errors {
            match err {
                Error::Serialize(_) | Error::Config { .. } => {}
            }
        }
    }
}
