//! Custom slide builder.
//!
//! A [`Slide`] stays open for mutation until the caller hands it to
//! [`crate::presentation::Presentation::add_slide`], which stores a
//! [`PresentationSlide`] snapshot. Later edits to the builder never reach
//! snapshots already taken.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::ids::{self, IdGenerator};
use crate::slide::element::{
    self, CharacterProps, ImageProps, MathProps, ShapeProps, SlideElement, StickerProps, TextProps,
};
use crate::types::{BorderStyle, Identifier};

/// Finished slide record as it appears inside a `created-slide` media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationSlide {
    /// Unique identifier.
    pub id: Identifier,
    /// Slide title.
    pub title: String,
    /// Elements in painter's order; later ones render on top.
    pub elements: Vec<SlideElement>,
    /// Background color.
    pub background_color: String,
    /// Background image, drawn by the host as it sees fit alongside the color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
    /// Slide outline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<SlideBorder>,
}

/// Outline drawn around a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideBorder {
    /// Line style.
    pub style: BorderStyle,
    /// Line color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Line width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// Border update. `None` fields keep whatever the slide already had.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderProps {
    /// New line style, always applied.
    pub style: BorderStyle,
    /// New line color, if changing.
    pub color: Option<String>,
    /// New line width, if changing.
    pub width: Option<f64>,
}

impl BorderProps {
    /// Change only the style.
    pub const fn style(style: BorderStyle) -> Self {
        Self { style, color: None, width: None }
    }
}

/// Builder accumulating elements and appearance for one custom slide.
#[derive(Clone)]
pub struct Slide {
    state: PresentationSlide,
    ids: Arc<dyn IdGenerator>,
}

impl fmt::Debug for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slide").field("state", &self.state).finish_non_exhaustive()
    }
}

impl Slide {
    /// Create an empty slide using the default identifier source.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id_generator(title, ids::default_generator())
    }

    /// Create an empty slide drawing identifiers from `ids`.
    pub fn with_id_generator(title: impl Into<String>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            state: PresentationSlide {
                id: ids.next_id(),
                title: title.into(),
                elements: Vec::new(),
                background_color: constants::slide::BACKGROUND_COLOR.to_string(),
                background_image_url: None,
                border: None,
            },
            ids,
        }
    }

    /// Slide identifier.
    pub const fn id(&self) -> &Identifier {
        &self.state.id
    }

    /// Slide title.
    pub fn title(&self) -> &str {
        &self.state.title
    }

    /// Elements added so far, in order.
    pub fn elements(&self) -> &[SlideElement] {
        &self.state.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.state.elements.len()
    }

    /// True if no element has been added.
    pub fn is_empty(&self) -> bool {
        self.state.elements.is_empty()
    }

    /// Current border, if any.
    pub const fn border(&self) -> Option<&SlideBorder> {
        self.state.border.as_ref()
    }

    /// Append a text element.
    pub fn add_text(&mut self, props: TextProps) -> &mut Self {
        let el = element::text(self.ids.as_ref(), props);
        self.push(el)
    }

    /// Append an image element.
    pub fn add_image(&mut self, props: ImageProps) -> &mut Self {
        let el = element::image(self.ids.as_ref(), props);
        self.push(el)
    }

    /// Append a math element.
    pub fn add_math(&mut self, props: MathProps) -> &mut Self {
        let el = element::math(self.ids.as_ref(), props);
        self.push(el)
    }

    /// Append a shape element.
    pub fn add_shape(&mut self, props: ShapeProps) -> &mut Self {
        let el = element::shape(self.ids.as_ref(), props);
        self.push(el)
    }

    /// Append a sticker showing `glyph`.
    pub fn add_sticker(&mut self, glyph: impl Into<String>, props: StickerProps) -> &mut Self {
        let el = element::sticker(self.ids.as_ref(), glyph, props);
        self.push(el)
    }

    /// Append an animated character.
    pub fn add_character(&mut self, props: CharacterProps) -> &mut Self {
        let el = element::character(self.ids.as_ref(), props);
        self.push(el)
    }

    /// Set the background color.
    pub fn set_background_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.state.background_color = color.into();
        self
    }

    /// Set the background image.
    pub fn set_background_image_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.state.background_image_url = Some(url.into());
        self
    }

    /// Update the border. Style is always replaced; color and width only when given.
    pub fn set_border(&mut self, props: BorderProps) -> &mut Self {
        let (color, width) = match self.state.border.take() {
            Some(prev) => (props.color.or(prev.color), props.width.or(prev.width)),
            None => (props.color, props.width),
        };
        self.state.border = Some(SlideBorder { style: props.style, color, width });
        self
    }

    /// Copy of the current state, detached from this builder.
    pub fn snapshot(&self) -> PresentationSlide {
        self.state.clone()
    }

    fn push(&mut self, el: SlideElement) -> &mut Self {
        tracing::debug!(slide = %self.state.id, element = el.type_name(), "added slide element");
        self.state.elements.push(el);
        self
    }
}
