use std::env;

use thiserror::Error;

/// Application configuration loaded from environment variables.
///
/// Validated once at process start; the process refuses to boot on a
/// missing or out-of-range value. Immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Content store project identifier.
    pub content_project_id: String,
    /// Content store dataset name.
    pub content_dataset: String,
    /// Content store API version date.
    pub content_api_version: String,
    /// Read token for the content store.
    pub content_read_token: String,
    /// Cap on pages pre-rendered into the cache at startup (1-1000).
    pub max_static_params: u32,
    /// SMTP account the contact pipeline authenticates as.
    pub smtp_user: String,
    /// SMTP app password.
    pub smtp_password: String,
    /// SMTP relay host.
    pub smtp_host: String,
    /// Operator address contact submissions are delivered to.
    pub contact_email: String,
    /// Shared secret for the revalidation webhook signature.
    pub revalidate_secret: String,
    /// Public base URL, used for canonical links and the sitemap.
    pub base_url: String,
    /// Site name used in email subjects and page chrome fallbacks.
    pub site_name: String,
    /// Amazon affiliate tag. Optional; links are plain without it.
    pub amazon_affiliate_tag: Option<String>,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{0} must be a valid number")]
    NotANumber(&'static str),
    #[error("{0} must be between {1} and {2}")]
    OutOfRange(&'static str, u32, u32),
    #[error("{0} must be an email address")]
    NotAnEmail(&'static str),
}

const MAX_STATIC_PARAMS_RANGE: (u32, u32) = (1, 1000);

impl AppConfig {
    /// Load configuration from environment variables, with defaults for
    /// everything that has one.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_static_params: u32 = required("MAX_STATIC_PARAMS")?
            .parse()
            .map_err(|_| ConfigError::NotANumber("MAX_STATIC_PARAMS"))?;
        let (lo, hi) = MAX_STATIC_PARAMS_RANGE;
        if !(lo..=hi).contains(&max_static_params) {
            return Err(ConfigError::OutOfRange("MAX_STATIC_PARAMS", lo, hi));
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::NotANumber("PORT"))?,
            content_project_id: required("CONTENT_PROJECT_ID")?,
            content_dataset: env::var("CONTENT_DATASET")
                .unwrap_or_else(|_| "production".to_string()),
            content_api_version: env::var("CONTENT_API_VERSION")
                .unwrap_or_else(|_| "2024-10-01".to_string()),
            content_read_token: required("CONTENT_READ_TOKEN")?,
            max_static_params,
            smtp_user: required_email("SMTP_USER")?,
            smtp_password: required("SMTP_APP_PASSWORD")?,
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            contact_email: required_email("CONTACT_EMAIL")?,
            revalidate_secret: required("REVALIDATE_SECRET")?,
            base_url: env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            site_name: env::var("SITE_NAME").unwrap_or_else(|_| "Waypost".to_string()),
            amazon_affiliate_tag: env::var("AMAZON_AFFILIATE_TAG").ok().filter(|t| !t.is_empty()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn required_email(name: &'static str) -> Result<String, ConfigError> {
    let value = required(name)?;
    if !looks_like_email(&value) {
        return Err(ConfigError::NotAnEmail(name));
    }
    Ok(value)
}

/// Shallow shape check, not RFC validation. Enough to catch a swapped or
/// empty variable at boot instead of at first send.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
