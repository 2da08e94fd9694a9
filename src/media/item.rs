//! Media queue records.
//!
//! Every queue entry shares `id`, `name`, `notes` and `transition`; the rest
//! depends on the kind and is flattened beside them under a `type` tag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::code::{CodeProject, ViewMode};
use crate::media::csv::CsvCell;
use crate::quiz::Quiz;
use crate::slide::PresentationSlide;
use crate::types::{CodeLanguage, Identifier, Transition};

/// One entry of the presentation's playback queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique identifier.
    pub id: Identifier,
    /// Display name.
    pub name: String,
    /// Presenter notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Transition into this item.
    pub transition: Transition,
    /// Kind-specific payload, tagged by `type`.
    #[serde(flatten)]
    pub kind: MediaKind,
}

impl MediaItem {
    /// Wire name of this item's kind.
    pub const fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

/// Kind-specific media payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum MediaKind {
    /// Still image.
    Image {
        /// Image data URL.
        data_url: String,
    },
    /// PDF document.
    Pdf {
        /// Document data URL.
        data_url: String,
        /// Page shown first.
        current_page: u32,
    },
    /// Video clip.
    Video {
        /// Video data URL.
        data_url: String,
        /// Playback start in seconds.
        start_time: f64,
        /// Chapter marks.
        timestamps: Vec<VideoTimestamp>,
    },
    /// Office document (slides, spreadsheet, text).
    Office {
        /// Document data URL, when already loaded.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data_url: Option<String>,
    },
    /// Web page.
    Url {
        /// Page address.
        url: String,
    },
    /// YouTube video.
    #[serde(rename = "youtube")]
    YouTube {
        /// Link as given by the caller.
        url: String,
        /// Privacy-enhanced embed URL.
        embed_url: String,
    },
    /// Single source file.
    CodeFile {
        /// Raw file text.
        content: String,
        /// Source language.
        language: CodeLanguage,
    },
    /// Tabular data.
    Csv {
        /// Raw text.
        content: String,
        /// Column names.
        headers: Vec<String>,
        /// Data rows.
        rows: Vec<Vec<CsvCell>>,
    },
    /// Custom slide snapshot.
    CreatedSlide {
        /// The slide as it was when queued.
        slide: PresentationSlide,
    },
    /// Interactive quiz.
    Quiz {
        /// Quiz content.
        quiz: Quiz,
    },
    /// Multi-file code walkthrough.
    CodeProject {
        /// Project content.
        project: CodeProject,
        /// Initial view.
        view_mode: ViewMode,
    },
    /// Full-screen QR code.
    QrCode {
        /// Heading.
        title: String,
        /// Encoded address.
        url: String,
        /// Caption.
        description: String,
        /// Slide background.
        background_color: String,
        /// Scans recorded by the host.
        scan_count: u64,
        /// Renderer options passed through to the host.
        qr_options: Map<String, Value>,
    },
}

impl MediaKind {
    /// Wire name of this kind.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Image { .. } => "image",
            Self::Pdf { .. } => "pdf",
            Self::Video { .. } => "video",
            Self::Office { .. } => "office",
            Self::Url { .. } => "url",
            Self::YouTube { .. } => "youtube",
            Self::CodeFile { .. } => "code-file",
            Self::Csv { .. } => "csv",
            Self::CreatedSlide { .. } => "created-slide",
            Self::Quiz { .. } => "quiz",
            Self::CodeProject { .. } => "code-project",
            Self::QrCode { .. } => "qr-code",
        }
    }
}

/// Chapter mark inside a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoTimestamp {
    /// Offset in seconds.
    pub time: f64,
    /// Chapter label.
    pub label: String,
}

/// Presenter-facing options shared by every media kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaOptions {
    /// Presenter notes.
    pub notes: Option<String>,
    /// Transition override; the configured default applies otherwise.
    pub transition: Option<Transition>,
}

impl MediaOptions {
    /// Options with notes only.
    pub fn notes(notes: impl Into<String>) -> Self {
        Self { notes: Some(notes.into()), transition: None }
    }

    /// Options with a transition only.
    pub const fn transition(transition: Transition) -> Self {
        Self { notes: None, transition: Some(transition) }
    }
}

/// Pre-shaped item awaiting an identifier and transition default.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDraft {
    /// Display name.
    pub name: String,
    /// Notes and transition.
    pub options: MediaOptions,
    /// Kind-specific payload.
    pub kind: MediaKind,
}

impl MediaDraft {
    /// Draft with default options.
    pub fn new(name: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            name: name.into(),
            options: MediaOptions::default(),
            kind,
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: MediaOptions) -> Self {
        self.options = options;
        self
    }
}

/// CSV item description; needs `content` or `rows`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvInput {
    /// Display name.
    pub name: String,
    /// Raw text.
    pub content: Option<String>,
    /// Column names.
    pub headers: Option<Vec<String>>,
    /// Data rows.
    pub rows: Option<Vec<Vec<CsvCell>>>,
    /// Notes and transition.
    pub options: MediaOptions,
}

impl CsvInput {
    /// CSV item built from raw text.
    pub fn from_content(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// CSV item built from a parsed table.
    pub fn from_rows(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<CsvCell>>) -> Self {
        Self {
            name: name.into(),
            headers: Some(headers),
            rows: Some(rows),
            ..Self::default()
        }
    }
}

/// PDF item description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfInput {
    /// Display name.
    pub name: String,
    /// Document data URL.
    pub data_url: String,
    /// Page shown first; defaults to 1.
    pub current_page: Option<u32>,
    /// Notes and transition.
    pub options: MediaOptions,
}

impl PdfInput {
    /// PDF opened on its first page.
    pub fn new(name: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_url: data_url.into(),
            ..Self::default()
        }
    }
}

/// Video item description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoInput {
    /// Display name.
    pub name: String,
    /// Video data URL.
    pub data_url: String,
    /// Playback start in seconds; defaults to 0.
    pub start_time: Option<f64>,
    /// Chapter marks; defaults to none.
    pub timestamps: Option<Vec<VideoTimestamp>>,
    /// Notes and transition.
    pub options: MediaOptions,
}

impl VideoInput {
    /// Video starting at zero with no chapter marks.
    pub fn new(name: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_url: data_url.into(),
            ..Self::default()
        }
    }
}

/// QR-code slide description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QrCodeInput {
    /// Heading, also used as the item name.
    pub title: String,
    /// Encoded address.
    pub url: String,
    /// Caption; defaults to "Scan the code".
    pub description: Option<String>,
    /// Background; defaults to white.
    pub background_color: Option<String>,
    /// Initial scan counter; defaults to 0.
    pub scan_count: Option<u64>,
    /// Renderer options; defaults to empty.
    pub qr_options: Option<Map<String, Value>>,
    /// Notes and transition.
    pub options: MediaOptions,
}

impl QrCodeInput {
    /// QR code with every optional field defaulted.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }
}
