//! Route path derivation and internal link normalization.

use std::borrow::Cow;

/// Path prefix all posts live under.
pub const BLOG_PREFIX: &str = "/blog";

/// Top-level routes that must not be rewritten under the blog prefix.
const TOP_LEVEL_PAGES: [&str; 6] = [
    "/about",
    "/contact",
    "/privacy-policy",
    "/terms-of-service",
    "/affiliate-disclosure",
    "/search",
];

/// Rewrite internal hrefs that should live under the blog prefix.
///
/// An href starting with `/` that is not the root, not already blog-rooted,
/// and not a known top-level page (exactly or with a sub-path) gets the
/// blog prefix prepended. External URLs, anchors, and already-correct
/// hrefs pass through unchanged.
pub fn normalize_internal_href(href: &str) -> Cow<'_, str> {
    if !href.starts_with('/') || href == "/" {
        return Cow::Borrowed(href);
    }
    if href == BLOG_PREFIX || href.starts_with("/blog/") {
        return Cow::Borrowed(href);
    }
    let is_top_level = TOP_LEVEL_PAGES
        .iter()
        .any(|page| href == *page || href.starts_with(&format!("{page}/")));
    if is_top_level {
        return Cow::Borrowed(href);
    }
    Cow::Owned(format!("{BLOG_PREFIX}{href}"))
}

/// Derive the canonical route path for a document.
///
/// Singleton types map to fixed literals; collection types to a segment plus
/// slug. Unknown types fall back to treating the slug as a root-level path.
/// Returns `None` when a slug-addressed type has no slug.
pub fn route_path(doc_type: &str, slug: Option<&str>) -> Option<String> {
    let path = match doc_type {
        "homePage" => "/".to_string(),
        "aboutPage" => "/about".to_string(),
        "contactPage" => "/contact".to_string(),
        "privacyPolicy" => "/privacy-policy".to_string(),
        "termsOfService" => "/terms-of-service".to_string(),
        "affiliateDisclosure" => "/affiliate-disclosure".to_string(),
        "page" => format!("/{}", slug?),
        "post" => format!("{BLOG_PREFIX}/{}", slug?),
        "category" => format!("/category/{}", slug?),
        "author" => format!("/author/{}", slug?),
        _ => format!("/{}", slug?),
    };
    Some(path)
}
