//! Post, category, and author pages.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use maud::html;
use waypost_core::document::Post;
use waypost_core::links::route_path;
use waypost_core::meta::{resolve_metadata, MetadataFallback, PageMetadata};
use waypost_render::{collect_toc, page_document, render_toc};

use crate::client::ClientError;
use crate::routes::pages::{not_found, ok_html, upstream_error};
use crate::routes::partials::{affiliate_disclosure_notice, byline, overall_rating, post_grid};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/blog/{slug}", get(post_page))
        .route("/category/{slug}", get(category_page))
        .route("/author/{slug}", get(author_page))
}

/// Render a post page to a full HTML string; `None` when the slug does not
/// resolve. Shared with cache warmup.
pub(crate) async fn render_post_page(
    state: &AppState,
    slug: &str,
) -> Result<Option<String>, ClientError> {
    let Some(post) = state.client().post_by_slug(slug).await? else {
        return Ok(None);
    };
    let settings = state.settings_or_default().await;
    let meta = post_metadata(state, &post);

    let toc = post
        .show_table_of_contents
        .then(|| collect_toc(&post.body))
        .as_deref()
        .and_then(render_toc);
    let content = state.renderer().render(&post.body);

    let body = html! {
        article.post {
            @if let Some(url) = post.main_image.as_ref().and_then(|i| i.asset.url.clone()) {
                div.post-cover {
                    img src=(url) alt=(post.main_image.as_ref().and_then(|i| i.alt.as_deref()).unwrap_or(&post.title));
                }
            }
            h1 { (post.title) }
            @if let Some(rating) = overall_rating(&post) { (rating) }
            @if let Some(byline) = byline(&post) { (byline) }
            @if post.show_affiliate_disclosure { (affiliate_disclosure_notice()) }
            @if let Some(toc) = &toc { aside.post-toc { (toc) } }
            div.post-body { (content) }
        }
    };
    Ok(Some(page_document(&meta, &settings, body).into_string()))
}

async fn post_page(Path(slug): Path<String>, State(state): State<AppState>) -> Response {
    let path = format!("/blog/{slug}");
    if let Some(cached) = state.cache().get(&path) {
        return ok_html(cached);
    }
    match render_post_page(&state, &slug).await {
        Ok(Some(html)) => {
            state.cache().insert(path, html.clone());
            ok_html(html)
        }
        Ok(None) => {
            let settings = state.settings_or_default().await;
            not_found(&settings)
        }
        Err(err) => {
            let settings = state.settings_or_default().await;
            upstream_error(&settings, &err)
        }
    }
}

fn post_metadata(state: &AppState, post: &Post) -> PageMetadata {
    let fallback = MetadataFallback {
        title: post.title.clone(),
        description: post.metadata.as_ref().and_then(|m| m.description.clone()),
        excerpt: post.excerpt.clone(),
        canonical_url: route_path("post", Some(&post.slug.current))
            .map(|path| state.absolute_url(&path)),
        main_image_url: post.main_image.as_ref().and_then(|i| i.asset.url.clone()),
    };
    let seo = post.seo.clone().unwrap_or_default();
    resolve_metadata(&seo, &fallback)
}

async fn category_page(Path(slug): Path<String>, State(state): State<AppState>) -> Response {
    let settings = state.settings_or_default().await;
    let category = match state.client().category_by_slug(&slug).await {
        Ok(Some(category)) => category,
        Ok(None) => return not_found(&settings),
        Err(err) => return upstream_error(&settings, &err),
    };
    let posts = match state.client().posts_in_category(&slug).await {
        Ok(posts) => posts,
        Err(err) => return upstream_error(&settings, &err),
    };

    let fallback = MetadataFallback {
        title: category.title.clone(),
        description: category.description.clone(),
        canonical_url: route_path("category", Some(&slug)).map(|path| state.absolute_url(&path)),
        ..MetadataFallback::default()
    };
    let seo = category.seo.clone().unwrap_or_default();
    let meta = resolve_metadata(&seo, &fallback);

    let body = html! {
        section.category-page {
            h1 { (category.title) }
            @if let Some(description) = &category.description {
                p.category-description { (description) }
            }
            (post_grid(&posts))
        }
    };
    ok_html(page_document(&meta, &settings, body).into_string())
}

async fn author_page(Path(slug): Path<String>, State(state): State<AppState>) -> Response {
    let settings = state.settings_or_default().await;
    let author = match state.client().author_by_slug(&slug).await {
        Ok(Some(author)) => author,
        Ok(None) => return not_found(&settings),
        Err(err) => return upstream_error(&settings, &err),
    };
    let posts = match state.client().posts_by_author(&slug).await {
        Ok(posts) => posts,
        Err(err) => return upstream_error(&settings, &err),
    };

    let fallback = MetadataFallback {
        title: author.name.clone(),
        canonical_url: route_path("author", Some(&slug)).map(|path| state.absolute_url(&path)),
        ..MetadataFallback::default()
    };
    let seo = author.seo.clone().unwrap_or_default();
    let meta = resolve_metadata(&seo, &fallback);

    let bio = state.renderer().render(&author.bio);
    let body = html! {
        section.author-page {
            header.author-header {
                @if let Some(url) = author.image.as_ref().and_then(|i| i.asset.url.clone()) {
                    img.author-portrait src=(url) alt=(author.name);
                }
                h1 { (author.name) }
            }
            div.author-bio { (bio) }
            h2 { "Posts by " (author.name) }
            (post_grid(&posts))
        }
    };
    ok_html(page_document(&meta, &settings, body).into_string())
}
