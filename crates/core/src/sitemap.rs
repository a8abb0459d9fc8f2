//! Sitemap derivation: map indexable documents to prioritized URL entries.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::links::route_path;

/// Minimal projection of a document for sitemap purposes, as queried from
/// the content store.
#[derive(Debug, Clone, Deserialize)]
pub struct SitemapRecord {
    #[serde(rename = "_type")]
    pub doc_type: String,
    pub slug: Option<String>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "noIndex")]
    pub no_index: Option<bool>,
}

/// One sitemap URL entry. Derived per request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: Option<DateTime<Utc>>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
        }
    }
}

/// Ranking heuristic, not a correctness-critical value. Ties are allowed.
pub fn sitemap_priority(doc_type: &str, slug: Option<&str>) -> f64 {
    match doc_type {
        "homePage" => 1.0,
        "post" => {
            let slug = slug.unwrap_or_default();
            if slug.contains("review") || slug.contains("best") {
                1.0
            } else {
                0.8
            }
        }
        "category" => 0.6,
        _ => 0.5,
    }
}

/// Derive sitemap entries from the full set of records.
///
/// Documents flagged `noIndex` are excluded entirely, as are slug-addressed
/// documents without a slug. Output ordering is unspecified.
pub fn build_sitemap(records: &[SitemapRecord], base_url: &str) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    records
        .iter()
        .filter(|r| !r.no_index.unwrap_or(false))
        .filter_map(|r| {
            let path = route_path(&r.doc_type, r.slug.as_deref())?;
            Some(SitemapEntry {
                url: format!("{base}{path}"),
                last_modified: r.updated_at,
                change_frequency: ChangeFrequency::Weekly,
                priority: sitemap_priority(&r.doc_type, r.slug.as_deref()),
            })
        })
        .collect()
}
