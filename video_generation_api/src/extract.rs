//! Scanning completion text for a usable video URL.

use std::sync::OnceLock;

use regex::Regex;

fn video_url_regex() -> &'static Regex {
    static VIDEO_URL_RE: OnceLock<Regex> = OnceLock::new();
    VIDEO_URL_RE.get_or_init(|| {
        Regex::new(r"(?i)https?://\S+\.(?:mp4|mov|avi|webm)")
            .expect("video url pattern should compile")
    })
}

/// First substring that looks like a link to a video file, if any.
#[must_use]
pub fn find_video_url(content: &str) -> Option<&str> {
    video_url_regex().find(content).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_plain_mp4_url() {
        let content = "Here is your video: https://example.com/out.mp4";
        assert_eq!(
            find_video_url(content),
            Some("https://example.com/out.mp4")
        );
    }

    #[test]
    fn finds_the_first_of_several_urls() {
        let content =
            "first https://a.example/one.webm then https://b.example/two.mp4";
        assert_eq!(find_video_url(content), Some("https://a.example/one.webm"));
    }

    #[test]
    fn matches_extensions_case_insensitively() {
        assert_eq!(
            find_video_url("see HTTPS://Example.com/Clip.MOV for details"),
            Some("HTTPS://Example.com/Clip.MOV")
        );
    }

    #[test]
    fn supports_every_video_extension() {
        for ext in ["mp4", "mov", "avi", "webm"] {
            let content = format!("https://cdn.example/video.{ext}");
            assert_eq!(find_video_url(&content), Some(content.as_str()));
        }
    }

    #[test]
    fn ignores_non_video_urls() {
        assert!(find_video_url("https://example.com/picture.png").is_none());
        assert!(find_video_url("no links here at all").is_none());
    }

    #[test]
    fn stops_at_whitespace() {
        let content = "https://example.com/a.mp4 trailing words";
        assert_eq!(find_video_url(content), Some("https://example.com/a.mp4"));
    }

    #[test]
    fn does_not_match_a_bare_extension() {
        assert!(find_video_url("the file out.mp4 has no scheme").is_none());
    }
}
