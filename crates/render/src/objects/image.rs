use maud::{html, Markup};
use serde_json::Value;
use waypost_core::image::ImageSource;

use crate::Renderer;

/// Inline content image. Renders nothing when the asset cannot be resolved.
pub(super) fn render(renderer: &Renderer, value: &Value) -> Option<Markup> {
    let image: ImageSource = serde_json::from_value(value.clone()).ok()?;
    let url = renderer.images().resolve(&image)?;
    let alt = image.alt.unwrap_or_default();

    Some(html! {
        figure.content-image {
            img src=(url) alt=(alt) loading="lazy";
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::{blocks, renderer};

    #[test]
    fn renders_expanded_asset() {
        let input = blocks(
            r#"[{"_type": "image", "asset": {"url": "https://cdn/pic.jpg"}, "alt": "A dog"}]"#,
        );
        let html = renderer().render(&input).into_string();
        assert!(html.contains(r#"src="https://cdn/pic.jpg""#));
        assert!(html.contains(r#"alt="A dog""#));
    }

    #[test]
    fn renders_raw_reference_via_cdn() {
        let input = blocks(r#"[{"_type": "image", "asset": {"_ref": "image-abc-640x480-webp"}}]"#);
        let html = renderer().render(&input).into_string();
        assert!(html.contains("https://cdn.sanity.io/images/testproj/production/abc-640x480.webp"));
    }

    #[test]
    fn missing_asset_renders_nothing() {
        let input = blocks(r#"[{"_type": "image", "alt": "orphan"}]"#);
        assert!(renderer().render(&input).into_string().is_empty());
    }
}
