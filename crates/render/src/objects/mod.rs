//! Embedded-object rendering.
//!
//! Dispatch over object `_type` goes through a static registry populated at
//! startup: discriminant to pure rendering function. Absence of a key is
//! the contract for "render nothing", not an error path. Each renderer
//! tolerates missing sub-fields by returning `None`.

mod comparison;
mod faq;
mod image;
mod product_box;
mod pros_cons;
mod table;
mod video;

use std::collections::HashMap;

use maud::Markup;
use serde_json::Value;
use waypost_core::content::ObjectBlock;

use crate::Renderer;

/// A pure function from an object payload to presentational output.
/// `None` means "render nothing".
pub type RenderObjectFn = fn(&Renderer, &Value) -> Option<Markup>;

pub struct ObjectRegistry {
    entries: HashMap<&'static str, RenderObjectFn>,
}

impl ObjectRegistry {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The built-in set of embedded content types.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register("image", image::render);
        registry.register("productBox", product_box::render);
        registry.register("faqSection", faq::render);
        registry.register("prosConsList", pros_cons::render);
        registry.register("comparisonTable", comparison::render);
        registry.register("videoEmbed", video::render);
        registry.register("table", table::render);
        registry
    }

    pub fn register(&mut self, object_type: &'static str, render: RenderObjectFn) {
        self.entries.insert(object_type, render);
    }

    pub(crate) fn render(&self, renderer: &Renderer, object: &ObjectBlock) -> Option<Markup> {
        match self.entries.get(object.object_type.as_str()) {
            Some(render) => render(renderer, &object.value),
            None => {
                tracing::debug!(object_type = %object.object_type, "skipping unregistered embedded object");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use maud::html;

    use super::*;
    use crate::test_support::{blocks, renderer};

    #[test]
    fn unknown_object_type_renders_nothing() {
        let input = blocks(r#"[{"_type": "futureWidget", "anything": {"nested": true}}]"#);
        let html = renderer().render(&input).into_string();
        assert!(html.is_empty());
    }

    #[test]
    fn object_without_discriminant_renders_nothing() {
        let input = blocks(r#"[{"payload": 1}]"#);
        let html = renderer().render(&input).into_string();
        assert!(html.is_empty());
    }

    #[test]
    fn custom_registration_is_dispatched() {
        fn badge(_: &Renderer, value: &Value) -> Option<Markup> {
            let label = value.get("label")?.as_str()?;
            Some(html! { span.badge { (label) } })
        }

        let mut registry = ObjectRegistry::standard();
        registry.register("badge", badge);
        let custom = crate::test_support::renderer().with_objects(registry);

        let input = blocks(r#"[{"_type": "badge", "label": "New"}]"#);
        let html = custom.render(&input).into_string();
        assert_eq!(html, r#"<span class="badge">New</span>"#);
    }
}
