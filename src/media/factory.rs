//! Media item construction.
//!
//! Turns caller input into queue-ready [`MediaItem`]s: stamps identifiers,
//! applies the default transition and performs the kind-specific
//! derivations. Inputs that cannot become an item (an unrecognized YouTube
//! link, a CSV with no data) yield `None` and a [`Diagnostic`].

use serde_json::Map;

use crate::code::CodeProjectInput;
use crate::constants::{media, qr};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::ids::IdGenerator;
use crate::media::csv::CsvTable;
use crate::media::item::{
    CsvInput, MediaDraft, MediaItem, MediaKind, MediaOptions, PdfInput, QrCodeInput, VideoInput,
};
use crate::media::youtube;
use crate::quiz::QuizInput;
use crate::slide::Slide;
use crate::types::{CodeLanguage, Transition};

/// Builds media items from borrowed capabilities.
#[derive(Debug, Clone, Copy)]
pub struct MediaFactory<'a> {
    ids: &'a dyn IdGenerator,
    diagnostics: &'a dyn DiagnosticSink,
    default_transition: Transition,
}

impl<'a> MediaFactory<'a> {
    /// Create a factory.
    pub const fn new(
        ids: &'a dyn IdGenerator,
        diagnostics: &'a dyn DiagnosticSink,
        default_transition: Transition,
    ) -> Self {
        Self { ids, diagnostics, default_transition }
    }

    /// Finish a pre-shaped draft.
    pub fn item(&self, draft: MediaDraft) -> MediaItem {
        MediaItem {
            id: self.ids.next_id(),
            name: draft.name,
            notes: draft.options.notes,
            transition: draft.options.transition.unwrap_or(self.default_transition),
            kind: draft.kind,
        }
    }

    fn build(&self, name: impl Into<String>, options: MediaOptions, kind: MediaKind) -> MediaItem {
        self.item(MediaDraft::new(name, kind).with_options(options))
    }

    /// Still image.
    pub fn image(&self, name: impl Into<String>, data_url: impl Into<String>, options: MediaOptions) -> MediaItem {
        self.build(name, options, MediaKind::Image { data_url: data_url.into() })
    }

    /// PDF, opened on its first page unless told otherwise.
    pub fn pdf(&self, input: PdfInput) -> MediaItem {
        let PdfInput { name, data_url, current_page, options } = input;
        let kind = MediaKind::Pdf {
            data_url,
            current_page: current_page.unwrap_or(media::PDF_START_PAGE),
        };
        self.build(name, options, kind)
    }

    /// Video, starting at zero with no chapter marks unless told otherwise.
    pub fn video(&self, input: VideoInput) -> MediaItem {
        let VideoInput { name, data_url, start_time, timestamps, options } = input;
        let kind = MediaKind::Video {
            data_url,
            start_time: start_time.unwrap_or(media::VIDEO_START_TIME),
            timestamps: timestamps.unwrap_or_default(),
        };
        self.build(name, options, kind)
    }

    /// Office document, optionally already loaded.
    pub fn office(&self, name: impl Into<String>, data_url: Option<String>, options: MediaOptions) -> MediaItem {
        self.build(name, options, MediaKind::Office { data_url })
    }

    /// Web page.
    pub fn url(&self, name: impl Into<String>, url: impl Into<String>, options: MediaOptions) -> MediaItem {
        self.build(name, options, MediaKind::Url { url: url.into() })
    }

    /// YouTube video. Unrecognized links are dropped with a diagnostic.
    pub fn youtube(&self, name: impl Into<String>, url: impl Into<String>, options: MediaOptions) -> Option<MediaItem> {
        let name = name.into();
        let url = url.into();
        let Some(embed_url) = youtube::embed_url(&url) else {
            self.diagnostics.emit(&Diagnostic::InvalidYouTubeUrl { name, url });
            return None;
        };
        Some(self.build(name, options, MediaKind::YouTube { url, embed_url }))
    }

    /// Single source file.
    pub fn code_file(
        &self,
        name: impl Into<String>,
        content: impl Into<String>,
        language: CodeLanguage,
        options: MediaOptions,
    ) -> MediaItem {
        let kind = MediaKind::CodeFile { content: content.into(), language };
        self.build(name, options, kind)
    }

    /// Table item. Dropped with a diagnostic when neither content nor rows exist.
    pub fn csv(&self, input: CsvInput) -> Option<MediaItem> {
        let CsvInput { name, content, headers, rows, options } = input;
        let Some(table) = CsvTable::derive(content, headers, rows) else {
            self.diagnostics.emit(&Diagnostic::EmptyCsv { name });
            return None;
        };
        let kind = MediaKind::Csv {
            content: table.content,
            headers: table.headers,
            rows: table.rows,
        };
        Some(self.build(name, options, kind))
    }

    /// Snapshot of a custom slide, named after its title.
    pub fn slide(&self, slide: &Slide, options: MediaOptions) -> MediaItem {
        let snapshot = slide.snapshot();
        self.build(snapshot.title.clone(), options, MediaKind::CreatedSlide { slide: snapshot })
    }

    /// Quiz, named after its title.
    pub fn quiz(&self, input: QuizInput, options: MediaOptions) -> MediaItem {
        let quiz = input.into_quiz(self.ids);
        self.build(quiz.title.clone(), options, MediaKind::Quiz { quiz })
    }

    /// Code project, named after its title.
    pub fn code_project(&self, input: CodeProjectInput, options: MediaOptions) -> MediaItem {
        let (project, view_mode) = input.into_project(self.ids);
        self.build(project.title.clone(), options, MediaKind::CodeProject { project, view_mode })
    }

    /// QR-code slide, named after its title.
    pub fn qr_code(&self, input: QrCodeInput) -> MediaItem {
        let QrCodeInput {
            title,
            url,
            description,
            background_color,
            scan_count,
            qr_options,
            options,
        } = input;
        let kind = MediaKind::QrCode {
            title: title.clone(),
            url,
            description: description.unwrap_or_else(|| qr::DESCRIPTION.to_string()),
            background_color: background_color.unwrap_or_else(|| qr::BACKGROUND_COLOR.to_string()),
            scan_count: scan_count.unwrap_or(qr::SCAN_COUNT),
            qr_options: qr_options.unwrap_or_else(Map::new),
        };
        self.build(title, options, kind)
    }
}
