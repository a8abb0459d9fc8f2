use maud::{html, Markup};
use serde::Deserialize;
use serde_json::Value;
use waypost_core::video::parse_video_url;

use crate::Renderer;

#[derive(Deserialize)]
struct VideoEmbed {
    url: Option<String>,
    caption: Option<String>,
}

/// Embedded video player. No URL, no output; an unrecognized host degrades
/// to a plain outbound link.
pub(super) fn render(_renderer: &Renderer, value: &Value) -> Option<Markup> {
    let embed: VideoEmbed = serde_json::from_value(value.clone()).ok()?;
    let url = embed.url.filter(|u| !u.is_empty())?;

    let Some(video) = parse_video_url(&url) else {
        return Some(html! {
            div.video-fallback {
                p { "Unable to embed video from: " (url) }
                a href=(url) target="_blank" rel="noopener noreferrer" { "Watch video →" }
            }
        });
    };

    let title = embed.caption.as_deref().unwrap_or("Video");
    Some(html! {
        figure.video-embed {
            iframe src=(video.embed_url())
                title=(title)
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen {}
            @if let Some(caption) = &embed.caption {
                figcaption { (caption) }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::{blocks, renderer};

    #[test]
    fn youtube_url_becomes_iframe() {
        let input = blocks(
            r#"[{"_type": "videoEmbed", "url": "https://www.youtube.com/watch?v=abc123", "caption": "Demo"}]"#,
        );
        let html = renderer().render(&input).into_string();
        assert!(html.contains("https://www.youtube.com/embed/abc123"));
        assert!(html.contains("<figcaption>Demo</figcaption>"));
    }

    #[test]
    fn missing_url_renders_nothing() {
        let input = blocks(r#"[{"_type": "videoEmbed", "caption": "no url"}]"#);
        assert!(renderer().render(&input).into_string().is_empty());
    }

    #[test]
    fn unrecognized_host_falls_back_to_link() {
        let input = blocks(r#"[{"_type": "videoEmbed", "url": "https://example.com/v.mp4"}]"#);
        let html = renderer().render(&input).into_string();
        assert!(html.contains("Unable to embed video"));
        assert!(html.contains(r#"href="https://example.com/v.mp4""#));
        assert!(!html.contains("iframe"));
    }
}
