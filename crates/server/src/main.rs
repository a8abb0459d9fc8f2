mod cache;
mod client;
mod config;
mod contact;
mod error;
mod mailer;
mod queries;
mod routes;
mod signature;
mod state;

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    // Load configuration; an invalid environment refuses to boot
    let config = config::AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    tracing::info!("Starting waypost server");

    let client = client::ContentClient::new(&config);
    let mailer = Arc::new(
        mailer::SmtpMailer::from_config(&config)
            .map_err(|e| anyhow::anyhow!("Failed to configure mailer: {e}"))?,
    );

    // Build application state
    let state = state::AppState::new(config.clone(), client, mailer);

    // Pre-render the most recent posts into the page cache, bounded by
    // MAX_STATIC_PARAMS. Failures are logged and non-fatal.
    tokio::spawn(warm_cache(state.clone()));

    // Build router with middleware
    let app = routes::build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    // Start server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Permissive CORS for development; tighten for production.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Pre-render the homepage and post pages into the cache so first requests
/// are warm. Each page is independent; one failure skips that page only.
async fn warm_cache(state: state::AppState) {
    match routes::pages::render_home(&state).await {
        Ok(html) => state.cache().insert("/", html),
        Err(err) => tracing::warn!(error = %err, "homepage warmup failed"),
    }

    let limit = state.config().max_static_params;
    let slugs = match state.client().post_slugs(limit).await {
        Ok(slugs) => slugs,
        Err(err) => {
            tracing::warn!(error = %err, "post slug listing failed, skipping warmup");
            return;
        }
    };

    let mut warmed = 0usize;
    for slug in &slugs {
        match routes::blog::render_post_page(&state, slug).await {
            Ok(Some(html)) => {
                state.cache().insert(format!("/blog/{slug}"), html);
                warmed += 1;
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(slug = %slug, error = %err, "post warmup failed"),
        }
    }
    tracing::info!(warmed, total = slugs.len(), "page cache warmup complete");
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { tracing::info!("Received Ctrl+C, shutting down..."); }
        _ = terminate => { tracing::info!("Received SIGTERM, shutting down..."); }
    }
}
