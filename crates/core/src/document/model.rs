use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::content::Block;
use crate::image::ImageSource;
use crate::document::seo::SeoFields;

/// Query projections return explicit `null` for absent arrays rather than
/// omitting the key; treat both as the default.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A document slug: `{ "current": "my-post" }` in the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Slug {
    #[serde(default)]
    pub current: String,
}

/// A blog post or product review.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub title: String,
    #[serde(default)]
    pub slug: Slug,
    pub excerpt: Option<String>,
    #[serde(rename = "mainImage")]
    pub main_image: Option<ImageSource>,
    #[serde(default, deserialize_with = "null_default")]
    pub body: Vec<Block>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    /// Category titles, expanded by the query.
    #[serde(default, deserialize_with = "null_default")]
    pub categories: Vec<String>,
    pub author: Option<Author>,
    /// Overall review rating, 0-5 with one decimal. Absent for non-reviews.
    #[serde(rename = "productRating")]
    pub product_rating: Option<f64>,
    #[serde(rename = "showAffiliateDisclosure", default, deserialize_with = "null_default")]
    pub show_affiliate_disclosure: bool,
    #[serde(rename = "showTableOfContents", default, deserialize_with = "null_default")]
    pub show_table_of_contents: bool,
    /// Secondary backend metadata, used as an SEO description fallback.
    pub metadata: Option<PostMetadata>,
    pub seo: Option<SeoFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostMetadata {
    pub description: Option<String>,
}

/// Card-sized projection of a post for listings.
#[derive(Debug, Clone, Deserialize)]
pub struct PostSummary {
    pub title: String,
    #[serde(default)]
    pub slug: Slug,
    pub excerpt: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_default")]
    pub categories: Vec<String>,
    #[serde(rename = "mainImage")]
    pub main_image: Option<ImageSource>,
}

/// A generic slug-addressed page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub name: String,
    #[serde(default)]
    pub slug: Slug,
    #[serde(default, deserialize_with = "null_default")]
    pub body: Vec<Block>,
    pub seo: Option<SeoFields>,
}

/// Shared shape of the singleton pages (about, contact, privacy policy,
/// terms of service, affiliate disclosure).
#[derive(Debug, Clone, Deserialize)]
pub struct SingletonPage {
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub content: Vec<Block>,
    /// Direct contact address, only set on the contact singleton.
    pub email: Option<String>,
    pub seo: Option<SeoFields>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub slug: Slug,
    pub image: Option<ImageSource>,
    #[serde(default, deserialize_with = "null_default")]
    pub bio: Vec<Block>,
    pub seo: Option<SeoFields>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub title: String,
    #[serde(default)]
    pub slug: Slug,
    pub description: Option<String>,
    pub seo: Option<SeoFields>,
}

/// Site-wide settings singleton. Threaded explicitly into page composition
/// rather than read from ambient state, so rendering stays pure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub title: Option<String>,
    pub description: Option<String>,
    pub logo: Option<ImageSource>,
    #[serde(rename = "socialMedia")]
    pub social_media: Option<SocialMedia>,
    #[serde(rename = "footerText")]
    pub footer_text: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialMedia {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_with_minimal_fields() {
        let post: Post = serde_json::from_str(
            r#"{"title": "Hello", "slug": {"current": "hello"}}"#,
        )
        .unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.slug.current, "hello");
        assert!(post.body.is_empty());
        assert!(post.seo.is_none());
        assert!(!post.show_table_of_contents);
    }

    #[test]
    fn settings_tolerates_empty_object() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert!(settings.title.is_none());
        assert!(settings.menu.is_empty());
    }

    #[test]
    fn projected_nulls_become_defaults() {
        let post: Post = serde_json::from_str(
            r#"{
                "title": "Hello",
                "slug": {"current": "hello"},
                "body": null,
                "categories": null,
                "showAffiliateDisclosure": null,
                "showTableOfContents": null
            }"#,
        )
        .unwrap();
        assert!(post.body.is_empty());
        assert!(post.categories.is_empty());
        assert!(!post.show_affiliate_disclosure);

        let settings: Settings = serde_json::from_str(r#"{"menu": null}"#).unwrap();
        assert!(settings.menu.is_empty());
    }
}
