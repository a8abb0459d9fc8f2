pub mod blog;
pub mod contact;
pub mod health;
pub mod pages;
mod partials;
pub mod revalidate;
pub mod robots;
pub mod sitemap;

use axum::Router;

use crate::state::AppState;

/// Assemble the full router with all route groups.
///
/// Order matters for the catch-all: `pages` registers `/{slug}` last, so
/// every fixed route group merges before it.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(revalidate::routes())
        .merge(sitemap::routes())
        .merge(robots::routes())
        .merge(contact::routes())
        .merge(blog::routes())
        .merge(pages::routes())
        .with_state(state)
}
