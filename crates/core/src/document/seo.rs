use serde::Deserialize;

use crate::image::ImageSource;

/// Optional per-document SEO metadata, as authored in the content store.
/// Every field may be absent; resolution fallbacks live in [`crate::meta`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeoFields {
    #[serde(rename = "metaTitle")]
    pub meta_title: Option<String>,
    #[serde(rename = "metaDescription")]
    pub meta_description: Option<String>,
    #[serde(rename = "seoKeywords")]
    pub seo_keywords: Option<Vec<String>>,
    #[serde(rename = "metaImage")]
    pub meta_image: Option<ImageSource>,
    #[serde(rename = "noIndex")]
    pub no_index: Option<bool>,
    #[serde(rename = "openGraph")]
    pub open_graph: Option<OpenGraphFields>,
    pub twitter: Option<TwitterFields>,
    #[serde(rename = "additionalMetaTags")]
    pub additional_meta_tags: Option<Vec<MetaTag>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenGraphFields {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "siteName")]
    pub site_name: Option<String>,
    pub url: Option<String>,
    pub image: Option<ImageSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TwitterFields {
    pub site: Option<String>,
}

/// One authored meta tag: a list of attributes, each with a typed value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaTag {
    #[serde(rename = "metaAttributes", default)]
    pub meta_attributes: Vec<MetaAttribute>,
}

/// A single attribute of an authored meta tag. Only `string` and `image`
/// typed values are recognized downstream; other types are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaAttribute {
    #[serde(rename = "attributeKey")]
    pub attribute_key: Option<String>,
    #[serde(rename = "attributeType")]
    pub attribute_type: Option<String>,
    #[serde(rename = "attributeValueString")]
    pub attribute_value_string: Option<String>,
    #[serde(rename = "attributeValueImage")]
    pub attribute_value_image: Option<ImageSource>,
}
