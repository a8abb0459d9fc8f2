//! Inline span rendering: decorator marks and link annotations.

use maud::{html, Markup};
use waypost_core::content::{MarkDef, TextBlock};
use waypost_core::links::normalize_internal_href;

/// Render a block's child spans, applying marks in order. A mark is either
/// a decorator name or a reference to one of the block's mark definitions;
/// anything unrecognized passes its content through unchanged.
pub(crate) fn render_spans(block: &TextBlock) -> Markup {
    let parts: Vec<Markup> = block
        .children
        .iter()
        .map(|span| {
            let mut markup = html! { (span.text) };
            for mark in &span.marks {
                markup = apply_mark(block, mark, markup);
            }
            markup
        })
        .collect();
    html! { @for part in &parts { (part) } }
}

fn apply_mark(block: &TextBlock, mark: &str, inner: Markup) -> Markup {
    match mark {
        "strong" => html! { strong { (inner) } },
        "em" => html! { em { (inner) } },
        "code" => html! { code { (inner) } },
        "underline" => html! { u { (inner) } },
        "strike-through" => html! { del { (inner) } },
        "sup" => html! { sup { (inner) } },
        "sub" => html! { sub { (inner) } },
        key => match block.mark_def(key) {
            Some(def) if def.def_type == "link" => render_link(def, inner),
            // Unknown decorator or annotation type: content passes through.
            _ => inner,
        },
    }
}

fn render_link(def: &MarkDef, inner: Markup) -> Markup {
    let href = normalize_internal_href(def.href.as_deref().unwrap_or_default()).into_owned();
    let target = def.blank.then_some("_blank");
    let rel = def
        .rel
        .clone()
        .or_else(|| def.blank.then(|| "noopener noreferrer".to_string()));

    html! {
        a href=(href) target=[target] rel=[rel] { (inner) }
    }
}
