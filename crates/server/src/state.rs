use std::sync::Arc;

use waypost_core::document::Settings;
use waypost_core::image::ImageUrlBuilder;
use waypost_render::Renderer;

use crate::cache::PageCache;
use crate::client::ContentClient;
use crate::config::AppConfig;
use crate::mailer::Mailer;

/// Shared application state, passed to all handlers via Axum's `State`
/// extractor. Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: AppConfig,
    client: ContentClient,
    renderer: Renderer,
    mailer: Arc<dyn Mailer>,
    cache: PageCache,
}

impl AppState {
    pub fn new(config: AppConfig, client: ContentClient, mailer: Arc<dyn Mailer>) -> Self {
        let renderer = Renderer::new(
            ImageUrlBuilder::new(&config.content_project_id, &config.content_dataset),
            config.amazon_affiliate_tag.clone(),
        );
        Self {
            inner: Arc::new(InnerState {
                config,
                client,
                renderer,
                mailer,
                cache: PageCache::new(),
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn client(&self) -> &ContentClient {
        &self.inner.client
    }

    pub fn renderer(&self) -> &Renderer {
        &self.inner.renderer
    }

    pub fn mailer(&self) -> Arc<dyn Mailer> {
        Arc::clone(&self.inner.mailer)
    }

    pub fn cache(&self) -> &PageCache {
        &self.inner.cache
    }

    /// Absolute URL for a site-relative path.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.config.base_url.trim_end_matches('/'))
    }

    /// Site settings for page chrome. A fetch failure degrades to defaults
    /// so chrome problems never take a page down.
    pub async fn settings_or_default(&self) -> Settings {
        match self.inner.client.settings().await {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default site settings");
                Settings::default()
            }
        }
    }
}
