//! Page chrome: the base document, header/footer from site settings, and
//! themed error pages.
//!
//! Settings are passed in explicitly by page composition, never read from
//! ambient state, so every render is a pure function of its inputs.

use maud::{html, Markup, DOCTYPE};
use waypost_core::document::Settings;
use waypost_core::meta::PageMetadata;

use crate::head::render_head;

const CSS: &str = include_str!("../static/style.css");

/// Render a complete HTML document: resolved head metadata, site header
/// and footer from settings, and the page body.
pub fn page_document(meta: &PageMetadata, settings: &Settings, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (render_head(meta))
                style { (CSS) }
            }
            body {
                (site_header(settings))
                main.site-main { (body) }
                (site_footer(settings))
            }
        }
    }
}

/// Themed 404 page body wrapped in the standard chrome.
pub fn not_found_page(settings: &Settings) -> Markup {
    let meta = PageMetadata {
        title: "Page Not Found".to_string(),
        description: "The page you are looking for does not exist.".to_string(),
        ..PageMetadata::default()
    };
    page_document(
        &meta,
        settings,
        html! {
            section.error-page {
                h1 { "404" }
                p { "The page you are looking for does not exist." }
                a href="/" { "Back to the homepage" }
            }
        },
    )
}

/// Generic 500 page. Never exposes error details; those go to the logs.
pub fn error_page(settings: &Settings) -> Markup {
    let meta = PageMetadata {
        title: "Something Went Wrong".to_string(),
        description: "An unexpected error occurred.".to_string(),
        ..PageMetadata::default()
    };
    page_document(
        &meta,
        settings,
        html! {
            section.error-page {
                h1 { "Something went wrong" }
                p { "An unexpected error occurred. Please try again later." }
                a href="/" { "Back to the homepage" }
            }
        },
    )
}

fn site_header(settings: &Settings) -> Markup {
    let title = settings.title.as_deref().unwrap_or_default();
    let logo_url = settings
        .logo
        .as_ref()
        .and_then(|logo| logo.asset.url.clone());

    html! {
        header.site-header {
            a.site-brand href="/" {
                @if let Some(src) = &logo_url {
                    img.site-logo src=(src) alt=(settings.logo.as_ref().and_then(|l| l.alt.as_deref()).unwrap_or(title));
                }
                span.site-title { (title) }
            }
            nav.site-nav {
                @for item in &settings.menu {
                    a href=(item.href) { (item.title) }
                }
            }
        }
    }
}

fn site_footer(settings: &Settings) -> Markup {
    let social = settings.social_media.clone().unwrap_or_default();
    let links: [(&str, &Option<String>); 5] = [
        ("Facebook", &social.facebook),
        ("Twitter", &social.twitter),
        ("Instagram", &social.instagram),
        ("LinkedIn", &social.linkedin),
        ("YouTube", &social.youtube),
    ];

    html! {
        footer.site-footer {
            @if let Some(text) = &settings.footer_text {
                p.footer-text { (text) }
            }
            div.footer-social {
                @for (label, url) in links {
                    @if let Some(href) = url {
                        a href=(href) target="_blank" rel="noopener noreferrer" { (label) }
                    }
                }
            }
            nav.footer-nav {
                a href="/privacy-policy" { "Privacy Policy" }
                a href="/terms-of-service" { "Terms of Service" }
                a href="/affiliate-disclosure" { "Affiliate Disclosure" }
            }
        }
    }
}
