use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ping", get(ping))
}

/// Full health check — verifies the content store answers queries.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.client().settings().await?;

    Ok(Json(json!({
        "status": "ok",
        "contentStore": "reachable",
        "cachedPages": state.cache().len(),
    })))
}

/// Lightweight ping — no upstream check.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
