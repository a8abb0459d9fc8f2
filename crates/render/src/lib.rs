//! HTML rendering for structured content and page chrome.
//!
//! The entry point is [`Renderer`]: it walks a block sequence in document
//! order and dispatches per block style, list kind, mark, and embedded
//! object type. Embedded objects go through a registry populated at
//! construction; an unregistered type renders nothing. Content authors may
//! publish object types this code does not know yet, and that must never
//! take a page down.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating
//! with automatic escaping.

mod head;
mod layout;
mod marks;
mod objects;
mod portable;
mod rating;
mod toc;

pub use head::render_head;
pub use layout::{error_page, not_found_page, page_document};
pub use objects::{ObjectRegistry, RenderObjectFn};
pub use rating::star_rating;
pub use toc::{collect_toc, render_toc, TocItem};

use maud::Markup;
use waypost_core::content::Block;
use waypost_core::image::ImageUrlBuilder;

/// Structured-content renderer. Holds the configuration the original site
/// resolved ambiently: the image CDN coordinates and the affiliate tag.
/// Construct once at startup and share.
pub struct Renderer {
    images: ImageUrlBuilder,
    affiliate_tag: Option<String>,
    objects: ObjectRegistry,
}

impl Renderer {
    pub fn new(images: ImageUrlBuilder, affiliate_tag: Option<String>) -> Self {
        Self {
            images,
            affiliate_tag,
            objects: ObjectRegistry::standard(),
        }
    }

    /// Render a block sequence to markup, preserving document order.
    pub fn render(&self, blocks: &[Block]) -> Markup {
        portable::render_blocks(self, blocks)
    }

    pub fn images(&self) -> &ImageUrlBuilder {
        &self.images
    }

    pub fn affiliate_tag(&self) -> Option<&str> {
        self.affiliate_tag.as_deref()
    }

    /// Replace the object registry, e.g. to register a custom embedded type.
    pub fn with_objects(mut self, objects: ObjectRegistry) -> Self {
        self.objects = objects;
        self
    }

    pub(crate) fn object_registry(&self) -> &ObjectRegistry {
        &self.objects
    }
}
