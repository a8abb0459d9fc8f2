//! Page metadata resolution.
//!
//! Pure: same inputs, same outputs, no I/O. The layered fallbacks mirror
//! what authors expect: explicit SEO fields win, then backend metadata,
//! then content-derived values, then a generated default.

use std::collections::BTreeMap;

use crate::document::{MetaTag, SeoFields};
use crate::image::ImageSource;

/// Resolved `<head>` metadata for one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// `Some` only when the document opts out of indexing.
    pub robots: Option<RobotsDirective>,
    pub canonical: Option<String>,
    pub open_graph: OpenGraphMeta,
    pub twitter: Option<TwitterMeta>,
    /// Flattened additional meta tags, key to value.
    pub other: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotsDirective {
    pub index: bool,
    pub follow: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenGraphMeta {
    pub title: String,
    pub description: String,
    pub site_name: Option<String>,
    pub url: Option<String>,
    /// Absent when no image could be resolved; no image key is emitted then.
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TwitterMeta {
    pub site: Option<String>,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

/// Document-derived values the SEO fields fall back to.
#[derive(Debug, Clone, Default)]
pub struct MetadataFallback {
    pub title: String,
    /// Secondary backend description field (`metadata.description`).
    pub description: Option<String>,
    pub excerpt: Option<String>,
    /// Absolute canonical URL, already derived from the route path.
    pub canonical_url: Option<String>,
    /// Cover image URL used when no SEO image is set.
    pub main_image_url: Option<String>,
}

impl MetadataFallback {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Resolve a document's SEO fields into page metadata.
pub fn resolve_metadata(seo: &SeoFields, fallback: &MetadataFallback) -> PageMetadata {
    let title = seo
        .meta_title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback.title.clone());

    let description = seo
        .meta_description
        .clone()
        .filter(|d| !d.is_empty())
        .or_else(|| fallback.description.clone().filter(|d| !d.is_empty()))
        .or_else(|| fallback.excerpt.clone().filter(|e| !e.is_empty()))
        .unwrap_or_else(|| format!("Read {title}"));

    let meta_image = seo.meta_image.as_ref().and_then(image_url);

    let og = seo.open_graph.clone().unwrap_or_default();
    let og_image = og
        .image
        .as_ref()
        .and_then(image_url)
        .or(meta_image.clone())
        .or_else(|| fallback.main_image_url.clone());

    let open_graph = OpenGraphMeta {
        title: og.title.clone().unwrap_or_else(|| title.clone()),
        description: og.description.clone().unwrap_or_else(|| description.clone()),
        site_name: og.site_name,
        url: og.url,
        image: og_image,
    };

    let twitter = seo.twitter.as_ref().map(|t| TwitterMeta {
        site: t.site.clone(),
        title: og.title.clone().unwrap_or_else(|| title.clone()),
        description: og.description.clone().unwrap_or_else(|| description.clone()),
        image: meta_image.clone(),
    });

    PageMetadata {
        title,
        description,
        keywords: seo.seo_keywords.clone().unwrap_or_default(),
        robots: seo.no_index.unwrap_or(false).then_some(RobotsDirective {
            index: false,
            follow: false,
        }),
        canonical: fallback.canonical_url.clone(),
        open_graph,
        twitter,
        other: flatten_meta_tags(seo.additional_meta_tags.as_deref().unwrap_or_default()),
    }
}

/// Flatten the two-level tag/attribute structure into a key-value map.
/// Only `string` and `image` typed attribute values are recognized; an
/// image resolves to its asset URL.
fn flatten_meta_tags(tags: &[MetaTag]) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for tag in tags {
        for attr in &tag.meta_attributes {
            let Some(key) = attr.attribute_key.as_ref().filter(|k| !k.is_empty()) else {
                continue;
            };
            match attr.attribute_type.as_deref() {
                Some("string") => {
                    if let Some(value) = &attr.attribute_value_string {
                        out.insert(key.clone(), value.clone());
                    }
                }
                Some("image") => {
                    if let Some(url) = attr.attribute_value_image.as_ref().and_then(image_url) {
                        out.insert(key.clone(), url);
                    }
                }
                _ => {}
            }
        }
    }
    out
}

fn image_url(image: &ImageSource) -> Option<String> {
    image.asset.url.clone().filter(|u| !u.is_empty())
}
