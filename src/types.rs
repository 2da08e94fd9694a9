//! Core type definitions shared by the builders.
//!
//! Identifiers are wrapped in a newtype so they cannot be mixed up with the
//! free-form strings (names, colors, URLs) that flow through every record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque record identifier, unique within one process run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(pub String);

impl Identifier {
    /// Create a new `Identifier` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Transition the host plays when moving onto a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// Cross-fade (host default).
    #[default]
    Fade,
    /// Slide in from the side.
    Slide,
    /// Zoom in.
    Zoom,
    /// Hard cut.
    None,
}

impl Transition {
    /// Returns all transition variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Fade, Self::Slide, Self::Zoom, Self::None]
    }

    /// Returns the wire name of this transition.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Zoom => "zoom",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| format!("unknown transition `{s}`"))
    }
}

/// Border line style of a custom slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Continuous line.
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Two parallel lines.
    Double,
    /// Animated "marching ants" outline.
    Ants,
    /// No border drawn.
    None,
}

/// Source language of a code file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    /// HTML markup.
    Html,
    /// CSS stylesheet.
    Css,
    /// JavaScript source.
    Javascript,
    /// Python source.
    Python,
    /// Rust source.
    Rust,
}
