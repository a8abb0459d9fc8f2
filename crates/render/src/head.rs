//! `<head>` tag emission from resolved page metadata.

use maud::{html, Markup};
use waypost_core::meta::PageMetadata;

/// Render resolved metadata as head tags. Absent fields emit no tag at
/// all: no robots tag unless the document opted out of indexing, no image
/// properties without a resolved image.
pub fn render_head(meta: &PageMetadata) -> Markup {
    html! {
        title { (meta.title) }
        meta name="description" content=(meta.description);
        @if !meta.keywords.is_empty() {
            meta name="keywords" content=(meta.keywords.join(", "));
        }
        @if meta.robots.is_some() {
            meta name="robots" content="noindex, nofollow";
        }
        @if let Some(canonical) = &meta.canonical {
            link rel="canonical" href=(canonical);
        }

        meta property="og:title" content=(meta.open_graph.title);
        meta property="og:description" content=(meta.open_graph.description);
        @if let Some(site_name) = &meta.open_graph.site_name {
            meta property="og:site_name" content=(site_name);
        }
        @if let Some(url) = &meta.open_graph.url {
            meta property="og:url" content=(url);
        }
        @if let Some(image) = &meta.open_graph.image {
            meta property="og:image" content=(image);
        }

        @if let Some(twitter) = &meta.twitter {
            meta name="twitter:card" content="summary_large_image";
            @if let Some(site) = &twitter.site {
                meta name="twitter:site" content=(site);
            }
            meta name="twitter:title" content=(twitter.title);
            meta name="twitter:description" content=(twitter.description);
            @if let Some(image) = &twitter.image {
                meta name="twitter:image" content=(image);
            }
        }

        @for (key, value) in &meta.other {
            meta name=(key) content=(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use waypost_core::document::SeoFields;
    use waypost_core::meta::{resolve_metadata, MetadataFallback};

    use super::*;

    #[test]
    fn minimal_metadata_has_no_robots_or_canonical() {
        let meta = resolve_metadata(&SeoFields::default(), &MetadataFallback::titled("Home"));
        let html = render_head(&meta).into_string();
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains(r#"content="Read Home""#));
        assert!(!html.contains("robots"));
        assert!(!html.contains("canonical"));
        assert!(!html.contains("og:image"));
    }

    #[test]
    fn no_index_emits_robots_tag() {
        let seo = SeoFields {
            no_index: Some(true),
            ..SeoFields::default()
        };
        let meta = resolve_metadata(&seo, &MetadataFallback::titled("Hidden"));
        let html = render_head(&meta).into_string();
        assert!(html.contains(r#"content="noindex, nofollow""#));
    }

    #[test]
    fn canonical_and_open_graph_emitted() {
        let fallback = MetadataFallback {
            title: "A Post".into(),
            canonical_url: Some("https://example.com/blog/a-post".into()),
            main_image_url: Some("https://cdn/cover.jpg".into()),
            ..MetadataFallback::default()
        };
        let html = render_head(&resolve_metadata(&SeoFields::default(), &fallback)).into_string();
        assert!(html.contains(r#"rel="canonical" href="https://example.com/blog/a-post""#));
        assert!(html.contains(r#"property="og:image" content="https://cdn/cover.jpg""#));
    }
}
