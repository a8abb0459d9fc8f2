//! Signed revalidation webhook from the content store.
//!
//! The signature is checked before anything else touches the payload; a
//! bad signature causes no side effect at all.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::signature::verify_signature;
use crate::state::AppState;

pub const SIGNATURE_HEADER: &str = "x-revalidate-signature";

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/revalidate", post(revalidate))
}

async fn revalidate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !verify_signature(&state.config().revalidate_secret, &body, signature) {
        return Err(ApiError::InvalidSignature);
    }

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("invalid JSON body".to_string()))?;
    let doc_type = payload
        .get("_type")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::BadRequest("missing _type".to_string()))?;
    let slug = payload.pointer("/slug/current").and_then(Value::as_str);

    for path in invalidation_paths(doc_type, slug) {
        state.cache().invalidate(&path);
    }

    Ok(Json(json!({
        "status": 200,
        "revalidated": true,
        "now": Utc::now().timestamp_millis(),
        "body": payload,
    })))
}

/// Paths a document change invalidates. A post change touches the homepage
/// and the sitemap, plus its own page when the slug is known; other types
/// currently invalidate nothing.
fn invalidation_paths(doc_type: &str, slug: Option<&str>) -> Vec<String> {
    if doc_type != "post" {
        return Vec::new();
    }
    let mut paths = vec!["/".to_string(), "/sitemap.xml".to_string()];
    if let Some(slug) = slug {
        paths.push(format!("/blog/{slug}"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_change_invalidates_home_sitemap_and_page() {
        let paths = invalidation_paths("post", Some("best-dog-shampoo-review"));
        assert_eq!(
            paths,
            vec!["/", "/sitemap.xml", "/blog/best-dog-shampoo-review"]
        );
    }

    #[test]
    fn post_without_slug_skips_its_page() {
        assert_eq!(invalidation_paths("post", None), vec!["/", "/sitemap.xml"]);
    }

    #[test]
    fn other_types_invalidate_nothing() {
        assert!(invalidation_paths("author", Some("jane")).is_empty());
        assert!(invalidation_paths("settings", None).is_empty());
    }
}
