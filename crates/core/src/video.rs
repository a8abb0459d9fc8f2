//! Video URL recognition for embedded players.

/// A recognized video host and the extracted video id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoId {
    YouTube(String),
    Vimeo(String),
}

impl VideoId {
    /// The player iframe URL for this video.
    pub fn embed_url(&self) -> String {
        match self {
            VideoId::YouTube(id) => format!("https://www.youtube.com/embed/{id}"),
            VideoId::Vimeo(id) => format!("https://player.vimeo.com/video/{id}"),
        }
    }
}

/// Extract a video id from a watch-page URL. Returns `None` for hosts we
/// cannot embed; callers fall back to a plain link.
pub fn parse_video_url(url: &str) -> Option<VideoId> {
    for marker in ["youtube.com/watch?v=", "youtu.be/", "youtube.com/embed/"] {
        if let Some(idx) = url.find(marker) {
            let rest = &url[idx + marker.len()..];
            let id: String = rest
                .chars()
                .take_while(|c| *c != '&' && *c != '?' && *c != '/' && !c.is_whitespace())
                .collect();
            if !id.is_empty() {
                return Some(VideoId::YouTube(id));
            }
        }
    }

    if let Some(idx) = url.find("vimeo.com/") {
        let rest = &url[idx + "vimeo.com/".len()..];
        let id: String = rest.chars().take_while(char::is_ascii_digit).collect();
        if !id.is_empty() {
            return Some(VideoId::Vimeo(id));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_watch_url() {
        assert_eq!(
            parse_video_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some(VideoId::YouTube("dQw4w9WgXcQ".into()))
        );
    }

    #[test]
    fn youtube_short_url_strips_query() {
        assert_eq!(
            parse_video_url("https://youtu.be/dQw4w9WgXcQ?t=42"),
            Some(VideoId::YouTube("dQw4w9WgXcQ".into()))
        );
    }

    #[test]
    fn youtube_embed_url() {
        assert_eq!(
            parse_video_url("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some(VideoId::YouTube("dQw4w9WgXcQ".into()))
        );
    }

    #[test]
    fn vimeo_url() {
        let id = parse_video_url("https://vimeo.com/123456789").unwrap();
        assert_eq!(id, VideoId::Vimeo("123456789".into()));
        assert_eq!(id.embed_url(), "https://player.vimeo.com/video/123456789");
    }

    #[test]
    fn unrecognized_host_is_none() {
        assert!(parse_video_url("https://example.com/video.mp4").is_none());
        assert!(parse_video_url("").is_none());
    }

    #[test]
    fn embed_url_for_youtube() {
        assert_eq!(
            VideoId::YouTube("abc".into()).embed_url(),
            "https://www.youtube.com/embed/abc"
        );
    }
}
