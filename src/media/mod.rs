//! Media queue items and their construction.

pub mod csv;
pub mod factory;
pub mod item;
pub mod youtube;

// Re-export commonly used types
pub use csv::{CsvCell, CsvTable};
pub use factory::MediaFactory;
pub use item::{
    CsvInput, MediaDraft, MediaItem, MediaKind, MediaOptions, PdfInput, QrCodeInput, VideoInput, VideoTimestamp,
};
