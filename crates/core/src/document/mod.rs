//! Typed content records fetched from the content store.

mod model;
mod seo;

pub use model::{
    Author, Category, MenuItem, Page, Post, PostMetadata, PostSummary, Settings, SingletonPage,
    Slug, SocialMedia,
};
pub use seo::{MetaAttribute, MetaTag, OpenGraphFields, SeoFields, TwitterFields};
