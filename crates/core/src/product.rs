//! Product entities embedded in review content, plus Amazon link building.

use serde::Deserialize;
use thiserror::Error;

use crate::image::ImageSource;

/// A product referenced by a product box or comparison table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEntity {
    #[serde(alias = "productName", default)]
    pub name: String,
    #[serde(alias = "productImage")]
    pub image: Option<ImageSource>,
    #[serde(default)]
    pub asin: String,
    pub price: Option<String>,
    /// 0-5 stars, one decimal precision.
    pub rating: Option<f64>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    /// Comparison-table feature bullets.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(rename = "buttonText")]
    pub button_text: Option<String>,
    #[serde(rename = "amazonRegion")]
    pub amazon_region: Option<String>,
}

/// Amazon region codes with a storefront we link to.
pub const AMAZON_REGIONS: [&str; 8] = ["com", "co.uk", "ca", "de", "fr", "in", "co.jp", "com.au"];

const DEFAULT_REGION: &str = "com";

/// A validated Amazon Standard Identification Number: exactly 10 uppercase
/// alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asin(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AsinError {
    #[error("ASIN must be exactly 10 characters, got {0}")]
    BadLength(usize),
    #[error("ASIN must be uppercase alphanumeric")]
    BadCharacter,
}

impl Asin {
    pub fn parse(raw: &str) -> Result<Self, AsinError> {
        if raw.len() != 10 {
            return Err(AsinError::BadLength(raw.len()));
        }
        if !raw.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
            return Err(AsinError::BadCharacter);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Build the storefront URL for a product, appending the affiliate tag as a
/// query parameter when one is configured.
///
/// An unknown region falls back to `com` rather than producing a dead
/// domain. The ASIN is passed through as authored; storefront validation
/// is an authoring-time concern.
pub fn amazon_product_url(asin: &str, region: Option<&str>, affiliate_tag: Option<&str>) -> String {
    let region = region
        .filter(|r| AMAZON_REGIONS.contains(r))
        .unwrap_or(DEFAULT_REGION);
    let base = format!("https://www.amazon.{region}/dp/{asin}");
    match affiliate_tag.filter(|t| !t.is_empty()) {
        Some(tag) => format!("{base}?tag={tag}"),
        None => base,
    }
}
