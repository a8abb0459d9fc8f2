//! Typed read-only client for the remote content store.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use waypost_core::document::{
    Author, Category, Page, Post, PostSummary, Settings, SingletonPage,
};
use waypost_core::sitemap::SitemapRecord;

use crate::config::AppConfig;
use crate::queries;

/// Issues GROQ queries over HTTP and decodes the documents they return.
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    query_url: String,
    token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("content store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("content store returned status {0}")]
    Status(StatusCode),
    #[error("failed to decode content store response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

impl ContentClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            query_url: format!(
                "https://{}.api.sanity.io/v{}/data/query/{}",
                config.content_project_id, config.content_api_version, config.content_dataset
            ),
            token: config.content_read_token.clone(),
        }
    }

    /// Run one query. Parameters are JSON-encoded and passed as `$name`
    /// query-string values, the store's parameter convention.
    async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, Value)],
    ) -> Result<T, ClientError> {
        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), query.to_string())];
        for (name, value) in params {
            pairs.push((format!("${name}"), value.to_string()));
        }

        let response = self
            .http
            .get(&self.query_url)
            .bearer_auth(&self.token)
            .query(&pairs)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = response.text().await?;
        let decoded: QueryResponse<T> = serde_json::from_str(&body)?;
        Ok(decoded.result)
    }

    /// The site settings singleton, or `None` when none is published.
    pub async fn settings(&self) -> Result<Option<Settings>, ClientError> {
        self.fetch(&queries::settings(), &[]).await
    }

    /// A singleton page by document type (`aboutPage`, `contactPage`, ...).
    pub async fn singleton(&self, kind: &str) -> Result<Option<SingletonPage>, ClientError> {
        self.fetch(&queries::singleton_page(), &[("kind", json!(kind))])
            .await
    }

    pub async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ClientError> {
        self.fetch(&queries::post_by_slug(), &[("slug", json!(slug))])
            .await
    }

    pub async fn page_by_slug(&self, slug: &str) -> Result<Option<Page>, ClientError> {
        self.fetch(&queries::page_by_slug(), &[("slug", json!(slug))])
            .await
    }

    pub async fn author_by_slug(&self, slug: &str) -> Result<Option<Author>, ClientError> {
        self.fetch(&queries::author_by_slug(), &[("slug", json!(slug))])
            .await
    }

    pub async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, ClientError> {
        self.fetch(&queries::category_by_slug(), &[("slug", json!(slug))])
            .await
    }

    pub async fn recent_posts(&self, limit: u32) -> Result<Vec<PostSummary>, ClientError> {
        self.fetch(&queries::recent_posts(), &[("limit", json!(limit))])
            .await
    }

    pub async fn posts_in_category(&self, slug: &str) -> Result<Vec<PostSummary>, ClientError> {
        self.fetch(&queries::posts_in_category(), &[("slug", json!(slug))])
            .await
    }

    pub async fn posts_by_author(&self, slug: &str) -> Result<Vec<PostSummary>, ClientError> {
        self.fetch(&queries::posts_by_author(), &[("slug", json!(slug))])
            .await
    }

    /// Slugs of posts to pre-render, capped by configuration.
    pub async fn post_slugs(&self, limit: u32) -> Result<Vec<String>, ClientError> {
        self.fetch(&queries::post_slugs(), &[("limit", json!(limit))])
            .await
    }

    pub async fn sitemap_records(&self) -> Result<Vec<SitemapRecord>, ClientError> {
        self.fetch(&queries::sitemap_records(), &[]).await
    }
}
