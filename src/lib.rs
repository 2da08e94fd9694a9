//! `showqueue` - fluent builder for presentation media queues.
//!
//! Assemble media items, custom slides, quizzes, code projects, QR-code
//! slides and sources in memory, then emit the JSON document a host
//! presentation app plays back.
//!
//! ```
//! use showqueue::{MediaOptions, Presentation, TextProps};
//!
//! let mut deck = Presentation::new();
//! let mut intro = deck.new_slide("Welcome");
//! intro.add_text(TextProps { content: Some("Hello".into()), ..TextProps::default() });
//! deck.add_slide(&intro, MediaOptions::default())
//!     .add_youtube("Teaser", "https://youtu.be/dQw4w9WgXcQ", MediaOptions::default());
//!
//! let json = deck.serialize().unwrap();
//! assert!(json.contains("mediaQueue"));
//! ```

pub mod code;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod ids;
pub mod media;
pub mod presentation;
pub mod quiz;
pub mod slide;
pub mod types;

// Re-export the types most callers need
pub use code::{CodeFileInput, CodeProjectInput, ViewMode};
pub use config::Config;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use error::{Error, Result};
pub use ids::{IdGenerator, SequentialIds, TimeRandomIds};
pub use media::{
    CsvCell, CsvInput, MediaDraft, MediaItem, MediaKind, MediaOptions, PdfInput, QrCodeInput, VideoInput,
    VideoTimestamp,
};
pub use presentation::{Presentation, PresentationDocument, SourceInput, SourceItem};
pub use quiz::{AnswerOptionInput, QuestionInput, QuizInput};
pub use slide::{
    ActionKind, BorderProps, CharacterProps, ImageProps, MathProps, ShapeProps, Slide,
    StickerProps, TextProps,
};
pub use types::{BorderStyle, CodeLanguage, Identifier, Transition};
