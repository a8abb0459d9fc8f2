use serde::Deserialize;

/// An image reference as it comes back from the content store: either the
/// query expanded the asset to a URL (`asset->{url}`) or the raw asset
/// reference is all we have.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSource {
    #[serde(default)]
    pub asset: ImageAsset,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageAsset {
    pub url: Option<String>,
    #[serde(rename = "_ref")]
    pub reference: Option<String>,
}

/// Builds CDN URLs for raw asset references.
///
/// References follow the `image-{assetId}-{width}x{height}-{format}`
/// convention; the CDN path is
/// `/images/{project}/{dataset}/{assetId}-{width}x{height}.{format}`.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: &str, dataset: &str) -> Self {
        Self {
            base: format!("https://cdn.sanity.io/images/{project_id}/{dataset}"),
        }
    }

    /// Resolve an image source to a URL. Prefers an already-expanded asset
    /// URL; otherwise decodes the raw reference. Returns `None` when the
    /// reference is missing or malformed, and callers render nothing.
    pub fn resolve(&self, image: &ImageSource) -> Option<String> {
        if let Some(url) = &image.asset.url {
            if !url.is_empty() {
                return Some(url.clone());
            }
        }
        let reference = image.asset.reference.as_deref()?;
        let rest = reference.strip_prefix("image-")?;
        // rightmost dash separates the file format
        let (body, format) = rest.rsplit_once('-')?;
        if body.is_empty() || format.is_empty() {
            return None;
        }
        Some(format!("{}/{body}.{format}", self.base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new("abc123", "production")
    }

    fn from_ref(reference: &str) -> ImageSource {
        ImageSource {
            asset: ImageAsset {
                url: None,
                reference: Some(reference.to_string()),
            },
            alt: None,
        }
    }

    #[test]
    fn prefers_expanded_url() {
        let image = ImageSource {
            asset: ImageAsset {
                url: Some("https://cdn.example.com/pic.jpg".into()),
                reference: Some("image-deadbeef-100x100-png".into()),
            },
            alt: None,
        };
        assert_eq!(
            builder().resolve(&image).as_deref(),
            Some("https://cdn.example.com/pic.jpg")
        );
    }

    #[test]
    fn decodes_raw_reference() {
        let image = from_ref("image-a1b2c3-1000x667-jpg");
        assert_eq!(
            builder().resolve(&image).as_deref(),
            Some("https://cdn.sanity.io/images/abc123/production/a1b2c3-1000x667.jpg")
        );
    }

    #[test]
    fn malformed_reference_is_none() {
        assert!(builder().resolve(&from_ref("file-a1b2c3-pdf")).is_none());
        assert!(builder().resolve(&from_ref("image-")).is_none());
        assert!(builder().resolve(&ImageSource::default()).is_none());
    }
}
