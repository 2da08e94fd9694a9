//! Slide element construction.
//!
//! Each constructor takes a partial props struct, fills every field the caller
//! left unset from [`crate::constants`], and stamps a fresh identifier. The
//! merge is shallow: a set field wins, an unset field takes the default. No
//! value is validated; colors, shape names and geometry pass through as given.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::ids::IdGenerator;
use crate::types::Identifier;

/// A positioned visual object on a custom slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideElement {
    /// Unique identifier.
    pub id: Identifier,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
    /// Type-specific fields, tagged by `type`.
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl SlideElement {
    /// Wire name of this element's type.
    pub const fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

/// Type-specific element payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ElementKind {
    /// Styled text box.
    Text {
        /// Text content.
        content: String,
        /// Font size in points.
        font_size: f64,
        /// Text color.
        color: String,
        /// Font family.
        font_family: String,
        /// Entrance animation name.
        animation: String,
    },
    /// Raster image.
    Image {
        /// Image URL or data URL.
        src: String,
    },
    /// Rendered formula.
    Math {
        /// Formula source.
        content: String,
        /// Font size in points.
        font_size: f64,
        /// Formula color.
        color: String,
    },
    /// Vector shape.
    Shape {
        /// Shape name, e.g. `rectangle`.
        shape: String,
        /// Outline color.
        stroke_color: String,
        /// Outline width.
        stroke_width: f64,
        /// Fill color.
        fill_color: String,
    },
    /// Emoji or glyph sticker.
    Sticker {
        /// The glyph drawn.
        sticker: String,
        /// Glyph scale, equal to the sticker size.
        font_size: f64,
        /// Rotation in degrees.
        rotation: f64,
    },
    /// Animated character with scripted actions.
    Gamification {
        /// Character sprite key.
        character: String,
        /// Actions run when the character is triggered, in order.
        actions: Vec<CharacterAction>,
    },
}

impl ElementKind {
    /// Wire name of this element type.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Math { .. } => "math",
            Self::Shape { .. } => "shape",
            Self::Sticker { .. } => "sticker",
            Self::Gamification { .. } => "gamification",
        }
    }
}

/// One scripted action of an animated character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterAction {
    /// Unique identifier.
    pub id: Identifier,
    /// What the action does.
    #[serde(flatten)]
    pub kind: ActionKind,
}

/// What a character action does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ActionKind {
    /// Show a speech bubble.
    Text {
        /// Bubble text.
        text: String,
    },
    /// Open a link.
    Link {
        /// Link target.
        url: String,
    },
}

/// Partial text element properties.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextProps {
    /// Text content.
    pub content: Option<String>,
    /// Left edge.
    pub x: Option<f64>,
    /// Top edge.
    pub y: Option<f64>,
    /// Box width.
    pub width: Option<f64>,
    /// Box height.
    pub height: Option<f64>,
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Text color.
    pub color: Option<String>,
    /// Font family.
    pub font_family: Option<String>,
    /// Entrance animation name.
    pub animation: Option<String>,
}

/// Partial image element properties.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageProps {
    /// Image URL or data URL.
    pub src: Option<String>,
    /// Left edge.
    pub x: Option<f64>,
    /// Top edge.
    pub y: Option<f64>,
    /// Box width.
    pub width: Option<f64>,
    /// Box height.
    pub height: Option<f64>,
}

/// Partial math element properties.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MathProps {
    /// Formula source.
    pub content: Option<String>,
    /// Left edge.
    pub x: Option<f64>,
    /// Top edge.
    pub y: Option<f64>,
    /// Box width.
    pub width: Option<f64>,
    /// Box height.
    pub height: Option<f64>,
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Formula color.
    pub color: Option<String>,
}

/// Partial shape element properties.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeProps {
    /// Shape name.
    pub shape: Option<String>,
    /// Left edge.
    pub x: Option<f64>,
    /// Top edge.
    pub y: Option<f64>,
    /// Box width.
    pub width: Option<f64>,
    /// Box height.
    pub height: Option<f64>,
    /// Outline color.
    pub stroke_color: Option<String>,
    /// Outline width.
    pub stroke_width: Option<f64>,
    /// Fill color.
    pub fill_color: Option<String>,
}

/// Partial sticker properties. The glyph itself is passed separately.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StickerProps {
    /// Left edge.
    pub x: Option<f64>,
    /// Top edge.
    pub y: Option<f64>,
    /// Edge length and glyph scale.
    pub size: Option<f64>,
    /// Rotation in degrees.
    pub rotation: Option<f64>,
}

/// Partial animated character properties.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterProps {
    /// Character sprite key.
    pub character: Option<String>,
    /// Left edge.
    pub x: Option<f64>,
    /// Top edge.
    pub y: Option<f64>,
    /// Box width.
    pub width: Option<f64>,
    /// Box height.
    pub height: Option<f64>,
    /// Replaces the default greeting when set.
    pub actions: Option<Vec<ActionKind>>,
}

/// Build a text element.
pub fn text(ids: &dyn IdGenerator, props: TextProps) -> SlideElement {
    SlideElement {
        id: ids.next_id(),
        x: props.x.unwrap_or(constants::text::X),
        y: props.y.unwrap_or(constants::text::Y),
        width: props.width.unwrap_or(constants::text::WIDTH),
        height: props.height.unwrap_or(constants::text::HEIGHT),
        kind: ElementKind::Text {
            content: props.content.unwrap_or_else(|| constants::text::CONTENT.to_string()),
            font_size: props.font_size.unwrap_or(constants::text::FONT_SIZE),
            color: props.color.unwrap_or_else(|| constants::text::COLOR.to_string()),
            font_family: props.font_family.unwrap_or_else(|| constants::text::FONT_FAMILY.to_string()),
            animation: props.animation.unwrap_or_else(|| constants::text::ANIMATION.to_string()),
        },
    }
}

/// Build an image element.
pub fn image(ids: &dyn IdGenerator, props: ImageProps) -> SlideElement {
    SlideElement {
        id: ids.next_id(),
        x: props.x.unwrap_or(constants::image::X),
        y: props.y.unwrap_or(constants::image::Y),
        width: props.width.unwrap_or(constants::image::WIDTH),
        height: props.height.unwrap_or(constants::image::HEIGHT),
        kind: ElementKind::Image {
            src: props.src.unwrap_or_else(|| constants::image::SRC.to_string()),
        },
    }
}

/// Build a math element.
pub fn math(ids: &dyn IdGenerator, props: MathProps) -> SlideElement {
    SlideElement {
        id: ids.next_id(),
        x: props.x.unwrap_or(constants::math::X),
        y: props.y.unwrap_or(constants::math::Y),
        width: props.width.unwrap_or(constants::math::WIDTH),
        height: props.height.unwrap_or(constants::math::HEIGHT),
        kind: ElementKind::Math {
            content: props.content.unwrap_or_else(|| constants::math::CONTENT.to_string()),
            font_size: props.font_size.unwrap_or(constants::math::FONT_SIZE),
            color: props.color.unwrap_or_else(|| constants::math::COLOR.to_string()),
        },
    }
}

/// Build a shape element.
pub fn shape(ids: &dyn IdGenerator, props: ShapeProps) -> SlideElement {
    SlideElement {
        id: ids.next_id(),
        x: props.x.unwrap_or(constants::shape::X),
        y: props.y.unwrap_or(constants::shape::Y),
        width: props.width.unwrap_or(constants::shape::WIDTH),
        height: props.height.unwrap_or(constants::shape::HEIGHT),
        kind: ElementKind::Shape {
            shape: props.shape.unwrap_or_else(|| constants::shape::SHAPE.to_string()),
            stroke_color: props.stroke_color.unwrap_or_else(|| constants::shape::STROKE_COLOR.to_string()),
            stroke_width: props.stroke_width.unwrap_or(constants::shape::STROKE_WIDTH),
            fill_color: props.fill_color.unwrap_or_else(|| constants::shape::FILL_COLOR.to_string()),
        },
    }
}

/// Build a sticker. The size fills width, height and glyph scale alike.
pub fn sticker(ids: &dyn IdGenerator, glyph: impl Into<String>, props: StickerProps) -> SlideElement {
    let size = props.size.unwrap_or(constants::sticker::SIZE);
    SlideElement {
        id: ids.next_id(),
        x: props.x.unwrap_or(constants::sticker::X),
        y: props.y.unwrap_or(constants::sticker::Y),
        width: size,
        height: size,
        kind: ElementKind::Sticker {
            sticker: glyph.into(),
            font_size: size,
            rotation: props.rotation.unwrap_or(constants::sticker::ROTATION),
        },
    }
}

/// Build an animated character. Without caller actions it greets once.
pub fn character(ids: &dyn IdGenerator, props: CharacterProps) -> SlideElement {
    let id = ids.next_id();
    let actions = props
        .actions
        .unwrap_or_else(|| {
            vec![ActionKind::Text {
                text: constants::character::GREETING.to_string(),
            }]
        })
        .into_iter()
        .map(|kind| CharacterAction { id: ids.next_id(), kind })
        .collect();

    SlideElement {
        id,
        x: props.x.unwrap_or(constants::character::X),
        y: props.y.unwrap_or(constants::character::Y),
        width: props.width.unwrap_or(constants::character::WIDTH),
        height: props.height.unwrap_or(constants::character::HEIGHT),
        kind: ElementKind::Gamification {
            character: props.character.unwrap_or_else(|| constants::character::CHARACTER.to_string()),
            actions,
        },
    }
}
