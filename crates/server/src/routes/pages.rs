//! Singleton and generic pages, plus the homepage.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use maud::{html, Markup};
use waypost_core::document::{Page, Settings, SingletonPage};
use waypost_core::links::route_path;
use waypost_core::meta::{resolve_metadata, MetadataFallback, PageMetadata};
use waypost_render::{error_page, not_found_page, page_document};

use crate::client::ClientError;
use crate::routes::partials::{contact_form, post_grid};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/privacy-policy", get(privacy_policy))
        .route("/terms-of-service", get(terms_of_service))
        .route("/affiliate-disclosure", get(affiliate_disclosure))
        .route("/{slug}", get(generic_page))
}

pub(crate) fn ok_html(body: String) -> Response {
    Html(body).into_response()
}

pub(crate) fn not_found(settings: &Settings) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(not_found_page(settings).into_string()),
    )
        .into_response()
}

pub(crate) fn upstream_error(settings: &Settings, err: &ClientError) -> Response {
    tracing::error!(error = %err, "content fetch failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(error_page(settings).into_string()),
    )
        .into_response()
}

const RECENT_POSTS: u32 = 18;

/// Render the homepage to a full HTML string. Shared with cache warmup.
pub(crate) async fn render_home(state: &AppState) -> Result<String, ClientError> {
    let settings = state.settings_or_default().await;
    let posts = state.client().recent_posts(RECENT_POSTS).await?;

    let site_title = settings.title.clone().unwrap_or_else(|| state.config().site_name.clone());
    let meta = PageMetadata {
        title: site_title.clone(),
        description: settings
            .description
            .clone()
            .unwrap_or_else(|| format!("Read {site_title}")),
        canonical: Some(state.absolute_url("/")),
        ..PageMetadata::default()
    };

    let body = html! {
        section.hero {
            h1 { (site_title) }
            @if let Some(description) = &settings.description {
                p { (description) }
            }
        }
        section.recent-posts {
            h2 { "Latest Reviews & Guides" }
            (post_grid(&posts))
        }
    };
    Ok(page_document(&meta, &settings, body).into_string())
}

async fn home(State(state): State<AppState>) -> Response {
    if let Some(cached) = state.cache().get("/") {
        return ok_html(cached);
    }
    match render_home(&state).await {
        Ok(html) => {
            state.cache().insert("/", html.clone());
            ok_html(html)
        }
        Err(err) => {
            let settings = state.settings_or_default().await;
            upstream_error(&settings, &err)
        }
    }
}

async fn about(State(state): State<AppState>) -> Response {
    singleton(&state, "aboutPage", None).await
}

async fn contact(State(state): State<AppState>) -> Response {
    singleton(&state, "contactPage", Some(contact_form(None))).await
}

/// The contact page re-rendered with the outcome of a submission.
pub(crate) async fn contact_page_with_result(
    state: &AppState,
    result: crate::contact::ContactResponse,
) -> Response {
    singleton(state, "contactPage", Some(contact_form(Some(&result)))).await
}

async fn privacy_policy(State(state): State<AppState>) -> Response {
    singleton(&state, "privacyPolicy", None).await
}

async fn terms_of_service(State(state): State<AppState>) -> Response {
    singleton(&state, "termsOfService", None).await
}

async fn affiliate_disclosure(State(state): State<AppState>) -> Response {
    singleton(&state, "affiliateDisclosure", None).await
}

/// Shared composition for the singleton pages: fetch, resolve metadata,
/// render content, append any extra section (the contact form).
async fn singleton(state: &AppState, kind: &str, extra: Option<Markup>) -> Response {
    let settings = state.settings_or_default().await;
    let page = match state.client().singleton(kind).await {
        Ok(Some(page)) => page,
        Ok(None) => return not_found(&settings),
        Err(err) => return upstream_error(&settings, &err),
    };

    let meta = singleton_metadata(state, kind, &page);
    let content = state.renderer().render(&page.content);
    let body = html! {
        article.singleton-page {
            h1 { (page.title) }
            (content)
            @if let Some(email) = &page.email {
                p.contact-direct {
                    "Or email us directly at: "
                    a href={"mailto:" (email)} { (email) }
                }
            }
            @if let Some(extra) = &extra { (extra) }
        }
    };
    ok_html(page_document(&meta, &settings, body).into_string())
}

fn singleton_metadata(state: &AppState, kind: &str, page: &SingletonPage) -> PageMetadata {
    let fallback = MetadataFallback {
        title: page.title.clone(),
        canonical_url: route_path(kind, None).map(|path| state.absolute_url(&path)),
        ..MetadataFallback::default()
    };
    let seo = page.seo.clone().unwrap_or_default();
    resolve_metadata(&seo, &fallback)
}

async fn generic_page(Path(slug): Path<String>, State(state): State<AppState>) -> Response {
    let settings = state.settings_or_default().await;
    let page = match state.client().page_by_slug(&slug).await {
        Ok(Some(page)) => page,
        Ok(None) => return not_found(&settings),
        Err(err) => return upstream_error(&settings, &err),
    };

    let meta = page_metadata(&state, &page);
    let content = state.renderer().render(&page.body);
    let body = html! {
        article.generic-page {
            h1 { (page.name) }
            (content)
        }
    };
    ok_html(page_document(&meta, &settings, body).into_string())
}

fn page_metadata(state: &AppState, page: &Page) -> PageMetadata {
    let fallback = MetadataFallback {
        title: page.name.clone(),
        canonical_url: route_path("page", Some(&page.slug.current))
            .map(|path| state.absolute_url(&path)),
        ..MetadataFallback::default()
    };
    let seo = page.seo.clone().unwrap_or_default();
    resolve_metadata(&seo, &fallback)
}
