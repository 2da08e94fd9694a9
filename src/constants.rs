//! Default values filled into records the caller leaves partially specified.
//!
//! The consuming host relies on these exact values, so they are centralized
//! here rather than scattered through the builders.

/// Slide-level appearance defaults.
pub mod slide {
    /// Background color of a freshly created slide.
    pub const BACKGROUND_COLOR: &str = "#ffffff";
}

/// Text element defaults.
pub mod text {
    /// Placeholder content.
    pub const CONTENT: &str = "New Text";
    /// Left edge.
    pub const X: f64 = 10.0;
    /// Top edge.
    pub const Y: f64 = 10.0;
    /// Box width.
    pub const WIDTH: f64 = 300.0;
    /// Box height.
    pub const HEIGHT: f64 = 50.0;
    /// Font size in points.
    pub const FONT_SIZE: f64 = 24.0;
    /// Text color.
    pub const COLOR: &str = "#000000";
    /// Font family.
    pub const FONT_FAMILY: &str = "Alegreya";
    /// Entrance animation.
    pub const ANIMATION: &str = "none";
}

/// Image element defaults.
pub mod image {
    /// Placeholder image.
    pub const SRC: &str = "https://placehold.co/300x200.png";
    /// Left edge.
    pub const X: f64 = 10.0;
    /// Top edge.
    pub const Y: f64 = 10.0;
    /// Box width.
    pub const WIDTH: f64 = 300.0;
    /// Box height.
    pub const HEIGHT: f64 = 200.0;
}

/// Math (formula) element defaults.
pub mod math {
    /// Placeholder formula.
    pub const CONTENT: &str = "E = mc^2";
    /// Left edge.
    pub const X: f64 = 10.0;
    /// Top edge.
    pub const Y: f64 = 10.0;
    /// Box width.
    pub const WIDTH: f64 = 200.0;
    /// Box height.
    pub const HEIGHT: f64 = 60.0;
    /// Font size in points.
    pub const FONT_SIZE: f64 = 24.0;
    /// Formula color.
    pub const COLOR: &str = "#000000";
}

/// Shape element defaults.
pub mod shape {
    /// Shape name.
    pub const SHAPE: &str = "rectangle";
    /// Left edge.
    pub const X: f64 = 10.0;
    /// Top edge.
    pub const Y: f64 = 10.0;
    /// Box width.
    pub const WIDTH: f64 = 150.0;
    /// Box height.
    pub const HEIGHT: f64 = 100.0;
    /// Outline color.
    pub const STROKE_COLOR: &str = "#000000";
    /// Outline width.
    pub const STROKE_WIDTH: f64 = 2.0;
    /// Fill color.
    pub const FILL_COLOR: &str = "transparent";
}

/// Sticker element defaults.
pub mod sticker {
    /// Left edge.
    pub const X: f64 = 10.0;
    /// Top edge.
    pub const Y: f64 = 10.0;
    /// Edge length, also used as glyph scale.
    pub const SIZE: f64 = 100.0;
    /// Rotation in degrees.
    pub const ROTATION: f64 = 0.0;
}

/// Animated character (gamification) element defaults.
pub mod character {
    /// Character sprite key.
    pub const CHARACTER: &str = "char1";
    /// Left edge.
    pub const X: f64 = 50.0;
    /// Top edge.
    pub const Y: f64 = 350.0;
    /// Box width.
    pub const WIDTH: f64 = 150.0;
    /// Box height.
    pub const HEIGHT: f64 = 200.0;
    /// Text spoken by the default action.
    pub const GREETING: &str = "Hello!";
}

/// Media item defaults.
pub mod media {
    /// First page shown for PDFs.
    pub const PDF_START_PAGE: u32 = 1;
    /// Playback start for videos, in seconds.
    pub const VIDEO_START_TIME: f64 = 0.0;
    /// Privacy-enhanced embed prefix for YouTube videos.
    pub const YOUTUBE_EMBED_PREFIX: &str = "https://www.youtube-nocookie.com/embed/";
    /// Length of a YouTube video id.
    pub const YOUTUBE_ID_LEN: usize = 11;
}

/// Quiz defaults.
pub mod quiz {
    /// Per-question timer in seconds.
    pub const TIMER_SECONDS: u32 = 30;
}

/// QR-code slide defaults.
pub mod qr {
    /// Caption shown beneath the code.
    pub const DESCRIPTION: &str = "Scan the code";
    /// Slide background.
    pub const BACKGROUND_COLOR: &str = "#ffffff";
    /// Initial scan counter.
    pub const SCAN_COUNT: u64 = 0;
}
