//! Contact form submission endpoint.

use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Form, Json, Router};

use crate::contact::{process_contact, ContactForm, ContactResponse};
use crate::routes::pages::contact_page_with_result;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/contact", post(submit))
}

/// Handle a submission. The mailer performs one blocking external call, so
/// it runs on the blocking pool. Browsers get the contact page re-rendered
/// with the outcome; API clients asking for JSON get the bare result.
async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Response {
    let mailer = state.mailer();
    let site_name = state.config().site_name.clone();
    let operator = state.config().contact_email.clone();

    let result = tokio::task::spawn_blocking(move || {
        process_contact(&form, mailer.as_ref(), &site_name, &operator)
    })
    .await
    .unwrap_or_else(|err| {
        tracing::error!(error = %err, "contact task panicked");
        ContactResponse::failed()
    });

    if wants_json(&headers) {
        return Json(result).into_response();
    }
    contact_page_with_result(&state, result).await
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}
