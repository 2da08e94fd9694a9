//! The presentation aggregate.
//!
//! Owns the media queue (playback order) and the source list, both
//! append-only. [`Presentation::serialize`] emits a snapshot of both; the
//! aggregate stays open for further additions afterwards.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::code::CodeProjectInput;
use crate::config::Config;
use crate::diagnostics::{self, DiagnosticSink};
use crate::error::Result;
use crate::ids::{self, IdGenerator};
use crate::media::{
    CsvInput, MediaDraft, MediaFactory, MediaItem, MediaOptions, PdfInput, QrCodeInput, VideoInput,
};
use crate::quiz::QuizInput;
use crate::slide::Slide;
use crate::types::{CodeLanguage, Identifier, Transition};

/// Bibliographic reference listed alongside the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceItem {
    /// Unique identifier.
    pub id: Identifier,
    /// Source title.
    pub title: String,
    /// Where to find it.
    pub url: String,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Tags in the order given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Source description as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInput {
    /// Source title.
    pub title: String,
    /// Where to find it.
    pub url: String,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Tags in the order given.
    pub tags: Option<Vec<String>>,
}

impl SourceInput {
    /// Source with no notes or tags.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Document handed to the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationDocument {
    /// Items in playback order.
    pub media_queue: Vec<MediaItem>,
    /// Sources in the order added.
    pub sources: Vec<SourceItem>,
}

/// Presentation under construction.
pub struct Presentation {
    media_queue: Vec<MediaItem>,
    sources: Vec<SourceItem>,
    ids: Arc<dyn IdGenerator>,
    diagnostics: Arc<dyn DiagnosticSink>,
    default_transition: Transition,
    pretty: bool,
}

impl fmt::Debug for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presentation")
            .field("media_queue", &self.media_queue.len())
            .field("sources", &self.sources.len())
            .field("ids", &self.ids)
            .field("diagnostics", &self.diagnostics)
            .field("default_transition", &self.default_transition)
            .finish_non_exhaustive()
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation {
    /// Empty presentation with default identifiers, logging diagnostics.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Empty presentation following `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            media_queue: Vec::new(),
            sources: Vec::new(),
            ids: ids::default_generator(),
            diagnostics: diagnostics::default_sink(),
            default_transition: config.default_transition,
            pretty: config.pretty,
        }
    }

    /// Replace the identifier source.
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Replace the diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Items queued so far, in playback order.
    pub fn media_queue(&self) -> &[MediaItem] {
        &self.media_queue
    }

    /// Sources added so far.
    pub fn sources(&self) -> &[SourceItem] {
        &self.sources
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.media_queue.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.media_queue.is_empty()
    }

    /// New slide builder sharing this presentation's identifier source.
    pub fn new_slide(&self, title: impl Into<String>) -> Slide {
        Slide::with_id_generator(title, Arc::clone(&self.ids))
    }

    fn factory(&self) -> MediaFactory<'_> {
        MediaFactory::new(self.ids.as_ref(), self.diagnostics.as_ref(), self.default_transition)
    }

    fn push(&mut self, item: MediaItem) -> &mut Self {
        tracing::debug!(id = %item.id, kind = item.type_name(), "queued media item");
        self.media_queue.push(item);
        self
    }

    fn push_some(&mut self, item: Option<MediaItem>) -> &mut Self {
        match item {
            Some(item) => self.push(item),
            None => self,
        }
    }

    /// Queue a pre-shaped item.
    pub fn add_media_item(&mut self, draft: MediaDraft) -> &mut Self {
        let item = self.factory().item(draft);
        self.push(item)
    }

    /// Queue a still image.
    pub fn add_image(&mut self, name: impl Into<String>, data_url: impl Into<String>, options: MediaOptions) -> &mut Self {
        let item = self.factory().image(name, data_url, options);
        self.push(item)
    }

    /// Queue a PDF.
    pub fn add_pdf(&mut self, input: PdfInput) -> &mut Self {
        let item = self.factory().pdf(input);
        self.push(item)
    }

    /// Queue a video.
    pub fn add_video(&mut self, input: VideoInput) -> &mut Self {
        let item = self.factory().video(input);
        self.push(item)
    }

    /// Queue an office document.
    pub fn add_office(&mut self, name: impl Into<String>, data_url: Option<String>, options: MediaOptions) -> &mut Self {
        let item = self.factory().office(name, data_url, options);
        self.push(item)
    }

    /// Queue a web page.
    pub fn add_url(&mut self, name: impl Into<String>, url: impl Into<String>, options: MediaOptions) -> &mut Self {
        let item = self.factory().url(name, url, options);
        self.push(item)
    }

    /// Queue a YouTube video; unrecognized links are skipped with a diagnostic.
    pub fn add_youtube(&mut self, name: impl Into<String>, url: impl Into<String>, options: MediaOptions) -> &mut Self {
        let item = self.factory().youtube(name, url, options);
        self.push_some(item)
    }

    /// Queue a single source file.
    pub fn add_code_file(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
        language: CodeLanguage,
        options: MediaOptions,
    ) -> &mut Self {
        let item = self.factory().code_file(name, content, language, options);
        self.push(item)
    }

    /// Queue a table; inputs with neither content nor rows are skipped with a diagnostic.
    pub fn add_csv(&mut self, input: CsvInput) -> &mut Self {
        let item = self.factory().csv(input);
        self.push_some(item)
    }

    /// Queue a copy of `slide` as it is right now.
    pub fn add_slide(&mut self, slide: &Slide, options: MediaOptions) -> &mut Self {
        let item = self.factory().slide(slide, options);
        self.push(item)
    }

    /// Queue a quiz.
    pub fn add_quiz(&mut self, input: QuizInput, options: MediaOptions) -> &mut Self {
        let item = self.factory().quiz(input, options);
        self.push(item)
    }

    /// Queue a code project.
    pub fn add_code_project(&mut self, input: CodeProjectInput, options: MediaOptions) -> &mut Self {
        let item = self.factory().code_project(input, options);
        self.push(item)
    }

    /// Queue a QR-code slide.
    pub fn add_qr_code(&mut self, input: QrCodeInput) -> &mut Self {
        let item = self.factory().qr_code(input);
        self.push(item)
    }

    /// Append a source.
    pub fn add_source(&mut self, input: SourceInput) -> &mut Self {
        let source = SourceItem {
            id: self.ids.next_id(),
            title: input.title,
            url: input.url,
            notes: input.notes,
            tags: input.tags,
        };
        tracing::debug!(id = %source.id, "added source");
        self.sources.push(source);
        self
    }

    /// Owned snapshot of the queue and sources.
    pub fn to_document(&self) -> PresentationDocument {
        PresentationDocument {
            media_queue: self.media_queue.clone(),
            sources: self.sources.clone(),
        }
    }

    /// JSON text of the current state, pretty-printed unless configured compact.
    pub fn serialize(&self) -> Result<String> {
        if self.pretty {
            self.serialize_pretty()
        } else {
            self.serialize_compact()
        }
    }

    /// Pretty-printed JSON text of the current state.
    pub fn serialize_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document_ref())?)
    }

    /// Single-line JSON text of the current state.
    pub fn serialize_compact(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.document_ref())?)
    }

    fn document_ref(&self) -> DocumentRef<'_> {
        DocumentRef {
            media_queue: &self.media_queue,
            sources: &self.sources,
        }
    }
}

/// Borrowed view serialized without cloning the queue.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRef<'a> {
    media_queue: &'a [MediaItem],
    sources: &'a [SourceItem],
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::field_reassign_with_default)]

    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::ids::SequentialIds;

    fn presentation() -> (Presentation, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::new());
        let p = Presentation::new()
            .with_id_generator(Arc::new(SequentialIds::new("p")))
            .with_diagnostics(Arc::clone(&sink) as Arc<dyn DiagnosticSink>);
        (p, sink)
    }

    #[test]
    fn queue_keeps_call_order() {
        let (mut p, _) = presentation();
        p.add_url("One", "https://one.example", MediaOptions::default())
            .add_image("Two", "data:image/png;base64,AA", MediaOptions::default())
            .add_office("Three", None, MediaOptions::default());

        let names: Vec<&str> = p.media_queue().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["One", "Two", "Three"]);
    }

    #[test]
    fn rejected_items_leave_queue_untouched() {
        let (mut p, sink) = presentation();
        p.add_youtube("Broken", "not-a-url", MediaOptions::default())
            .add_csv(CsvInput { name: "t".into(), ..CsvInput::default() });
        assert!(p.is_empty());
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn sources_are_separate_from_queue() {
        let (mut p, _) = presentation();
        p.add_source(SourceInput {
            tags: Some(vec!["paper".into(), "2019".into()]),
            ..SourceInput::new("Attention", "https://arxiv.org/abs/1706.03762")
        });
        p.add_source(SourceInput::new("Docs", "https://docs.rs"));

        assert!(p.is_empty());
        assert_eq!(p.sources().len(), 2);
        let value = serde_json::to_value(&p.sources()[1]).unwrap();
        assert!(value.get("notes").is_none());
        assert!(value.get("tags").is_none());
    }

    #[test]
    fn configured_transition_applies_to_every_item() {
        let mut config = Config::default();
        config.default_transition = Transition::None;
        let mut p = Presentation::from_config(&config);
        p.add_url("A", "https://a.example", MediaOptions::default());
        assert_eq!(p.media_queue()[0].transition, Transition::None);
    }

    #[test]
    fn compact_and_pretty_agree() {
        let (mut p, _) = presentation();
        p.add_url("A", "https://a.example", MediaOptions::notes("first"));
        let pretty: serde_json::Value = serde_json::from_str(&p.serialize_pretty().unwrap()).unwrap();
        let compact: serde_json::Value = serde_json::from_str(&p.serialize_compact().unwrap()).unwrap();
        assert_eq!(pretty, compact);
        assert!(!p.serialize_compact().unwrap().contains('\n'));
    }

    #[test]
    fn document_round_trips() {
        let (mut p, _) = presentation();
        let mut slide = p.new_slide("Hello");
        slide.add_text(crate::slide::TextProps::default());
        p.add_slide(&slide, MediaOptions::default());

        let text = p.serialize().unwrap();
        let parsed: PresentationDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, p.to_document());
    }
}
