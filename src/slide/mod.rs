//! Custom slides and their visual elements.

pub mod builder;
pub mod element;

// Re-export commonly used types
pub use builder::{BorderProps, PresentationSlide, Slide, SlideBorder};
pub use element::{
    ActionKind, CharacterAction, CharacterProps, ElementKind, ImageProps, MathProps, ShapeProps,
    SlideElement, StickerProps, TextProps,
};
