//! GROQ query expressions issued against the content store.
//!
//! Queries project exactly what the document models deserialize; asset
//! references the chrome needs are expanded to URLs in the projection, while
//! body blocks come back raw for the renderer.

const SEO_FRAGMENT: &str = r#"seo {
    metaTitle,
    metaDescription,
    seoKeywords,
    metaImage { asset->{ url }, alt },
    noIndex,
    openGraph { title, description, siteName, url, image { asset->{ url }, alt } },
    twitter { site },
    additionalMetaTags[] {
      metaAttributes[] {
        attributeKey,
        attributeType,
        attributeValueString,
        attributeValueImage { asset->{ url } }
      }
    }
  }"#;

pub fn settings() -> String {
    r#"*[_type == "settings"][0]{
  title,
  description,
  logo { asset->{ url }, alt },
  socialMedia { facebook, twitter, instagram, linkedin, youtube },
  footerText,
  "menu": menu[]{ title, href }
}"#
    .to_string()
}

pub fn post_by_slug() -> String {
    format!(
        r#"*[_type == "post" && slug.current == $slug][0]{{
  title,
  slug,
  excerpt,
  mainImage {{ asset->{{ url }}, alt }},
  body[],
  publishedAt,
  "categories": categories[]->title,
  author->{{ name, slug }},
  productRating,
  showAffiliateDisclosure,
  showTableOfContents,
  metadata {{ description }},
  {SEO_FRAGMENT}
}}"#
    )
}

pub fn page_by_slug() -> String {
    format!(
        r#"*[_type == "page" && slug.current == $slug][0]{{
  name,
  slug,
  body[],
  {SEO_FRAGMENT}
}}"#
    )
}

/// Shared shape for the singleton pages; `$kind` is bound to the document
/// type (`aboutPage`, `contactPage`, ...).
pub fn singleton_page() -> String {
    format!(
        r#"*[_type == $kind][0]{{
  title,
  content[],
  email,
  {SEO_FRAGMENT}
}}"#
    )
}

pub fn author_by_slug() -> String {
    format!(
        r#"*[_type == "author" && slug.current == $slug][0]{{
  name,
  slug,
  image {{ asset->{{ url }}, alt }},
  bio[],
  {SEO_FRAGMENT}
}}"#
    )
}

pub fn category_by_slug() -> String {
    format!(
        r#"*[_type == "category" && slug.current == $slug][0]{{
  title,
  slug,
  description,
  {SEO_FRAGMENT}
}}"#
    )
}

pub fn recent_posts() -> String {
    r#"*[_type == "post"] | order(coalesce(publishedAt, _createdAt) desc) [0...$limit] {
  title,
  slug,
  excerpt,
  "publishedAt": coalesce(publishedAt, _createdAt),
  "categories": categories[]->title,
  mainImage { asset->{ url }, alt }
}"#
    .to_string()
}

/// Posts in a category, newest first.
pub fn posts_in_category() -> String {
    r#"*[_type == "post" && references(*[_type == "category" && slug.current == $slug]._id)]
  | order(coalesce(publishedAt, _createdAt) desc) {
  title,
  slug,
  excerpt,
  "publishedAt": coalesce(publishedAt, _createdAt),
  "categories": categories[]->title,
  mainImage { asset->{ url }, alt }
}"#
    .to_string()
}

/// Posts by an author, newest first.
pub fn posts_by_author() -> String {
    r#"*[_type == "post" && author->slug.current == $slug]
  | order(coalesce(publishedAt, _createdAt) desc) {
  title,
  slug,
  excerpt,
  "publishedAt": coalesce(publishedAt, _createdAt),
  "categories": categories[]->title,
  mainImage { asset->{ url }, alt }
}"#
    .to_string()
}

pub fn post_slugs() -> String {
    r#"*[_type == "post" && defined(slug.current)][0..$limit].slug.current"#.to_string()
}

/// Every publicly indexable document, projected down to what the sitemap
/// builder needs. Exclusion of `noIndex` documents happens in code so the
/// rule is unit-testable.
pub fn sitemap_records() -> String {
    r#"*[(_type in ["page", "post", "category", "author"] && defined(slug.current))
  || _type in ["homePage", "aboutPage", "contactPage", "privacyPolicy", "termsOfService", "affiliateDisclosure"]]{
  _type,
  "slug": slug.current,
  _updatedAt,
  "noIndex": seo.noIndex
}"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_are_spliced() {
        let q = post_by_slug();
        assert!(q.contains("metaTitle"));
        assert!(q.contains("additionalMetaTags"));
        assert!(q.contains("$slug"));
    }

    #[test]
    fn sitemap_query_projects_no_index() {
        let q = sitemap_records();
        assert!(q.contains(r#""noIndex": seo.noIndex"#));
    }
}
