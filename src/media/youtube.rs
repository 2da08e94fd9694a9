//! YouTube URL recognition.
//!
//! Accepts `watch?v=`, `&v=`, `embed/` and `v/` links on a `youtube.com` host
//! (bare, `www.` or `m.`) plus `youtu.be/` short links, and turns them into
//! privacy-enhanced embed URLs. Links on any other host are rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::media::YOUTUBE_EMBED_PREFIX;

/// Regex capturing an 11-character video id after a recognized host and path.
#[allow(clippy::expect_used)]
static RE_VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:https?://)?",
        r"(?:(?:www\.|m\.)?youtube\.com/(?:watch\?(?:[^#\s]*&)?v=|embed/|v/)|youtu\.be/)",
        r"([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
    ))
    .expect("valid regex: RE_VIDEO_ID")
});

/// Extract the video id from a YouTube URL.
pub fn extract_video_id(url: &str) -> Option<&str> {
    RE_VIDEO_ID
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Build the embed URL for a YouTube link, if it is one.
pub fn embed_url(url: &str) -> Option<String> {
    extract_video_id(url).map(|id| format!("{YOUTUBE_EMBED_PREFIX}{id}"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_recognized_shapes() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ?version=3",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/embed/dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ",
        ];
        for url in urls {
            assert_eq!(extract_video_id(url), Some("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn test_embed_url_uses_nocookie_host() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_rejects_non_youtube_and_bad_ids() {
        assert_eq!(extract_video_id("not-a-url"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQextra"), None);
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("https://vimeo.com/embed/abcdefghijk"), None);
        assert_eq!(extract_video_id("https://example.com/page?v=abcdefghijk"), None);
        assert_eq!(extract_video_id("https://evil.test/v/abcdefghijk"), None);
        assert_eq!(extract_video_id("https://notyoutube.com/embed/abcdefghijk"), None);
        assert_eq!(extract_video_id("https://youtube.com.evil.test/embed/abcdefghijk"), None);
        assert_eq!(extract_video_id("https://evil.test/?u=youtu.be/abcdefghijk"), None);
    }
}
