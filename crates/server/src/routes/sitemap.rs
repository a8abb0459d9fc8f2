//! Sitemap endpoint.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use waypost_core::sitemap::{build_sitemap, SitemapEntry};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/sitemap.xml", get(sitemap))
}

const CACHE_PATH: &str = "/sitemap.xml";

async fn sitemap(State(state): State<AppState>) -> Response {
    if let Some(cached) = state.cache().get(CACHE_PATH) {
        return xml_response(cached);
    }

    // A generation failure degrades to an empty sitemap, never a failed
    // response.
    let records = match state.client().sitemap_records().await {
        Ok(records) => records,
        Err(err) => {
            tracing::error!(error = %err, "sitemap generation failed");
            Vec::new()
        }
    };
    let entries = build_sitemap(&records, &state.config().base_url);
    let xml = render_sitemap_xml(&entries);
    state.cache().insert(CACHE_PATH, xml.clone());
    xml_response(xml)
}

fn xml_response(xml: String) -> Response {
    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}

fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&entry.url)));
        if let Some(modified) = &entry.last_modified {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", modified.to_rfc3339()));
        }
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use waypost_core::sitemap::SitemapRecord;

    use super::*;

    #[test]
    fn renders_urlset() {
        let records = vec![
            SitemapRecord {
                doc_type: "homePage".into(),
                slug: None,
                updated_at: None,
                no_index: None,
            },
            SitemapRecord {
                doc_type: "post".into(),
                slug: Some("best-dog-shampoo-review".into()),
                updated_at: None,
                no_index: None,
            },
        ];
        let entries = build_sitemap(&records, "https://example.com");
        let xml = render_sitemap_xml(&entries);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog/best-dog-shampoo-review</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
    }

    #[test]
    fn empty_entries_render_empty_urlset() {
        let xml = render_sitemap_xml(&[]);
        assert!(xml.contains("<urlset"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(xml_escape("a&b<c"), "a&amp;b&lt;c");
    }
}
