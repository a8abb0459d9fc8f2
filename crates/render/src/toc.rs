//! Table-of-contents derivation.
//!
//! Collected from the block sequence before rendering, not by scanning the
//! produced DOM: same ordered output, no live document required.

use maud::{html, Markup};
use waypost_core::content::Block;
use waypost_core::slug::slugify;

/// One table-of-contents entry, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocItem {
    pub id: String,
    pub text: String,
    pub level: u8,
}

/// Collect `h2`/`h3` headings. The ids match the anchors the renderer
/// assigns, since both derive from the same slugified heading text.
pub fn collect_toc(blocks: &[Block]) -> Vec<TocItem> {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Text(text) => {
                let level = text.style.heading_level()?;
                if level != 2 && level != 3 {
                    return None;
                }
                let plain = text.plain_text();
                Some(TocItem {
                    id: slugify(&plain),
                    text: plain,
                    level,
                })
            }
            Block::Object(_) => None,
        })
        .collect()
}

/// Render the table of contents. `None` when there is nothing to link.
pub fn render_toc(items: &[TocItem]) -> Option<Markup> {
    if items.is_empty() {
        return None;
    }
    Some(html! {
        nav.table-of-contents {
            h3 { "Table of Contents" }
            ul {
                @for item in items {
                    li class=[(item.level == 3).then_some("toc-sub")] {
                        a href={"#" (item.id)} { (item.text) }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::blocks;

    #[test]
    fn collects_h2_and_h3_in_order() {
        let input = blocks(
            r#"[
                {"_type": "block", "style": "h1", "children": [{"_type": "span", "text": "Title", "marks": []}], "markDefs": []},
                {"_type": "block", "style": "h2", "children": [{"_type": "span", "text": "First", "marks": []}], "markDefs": []},
                {"_type": "block", "style": "normal", "children": [{"_type": "span", "text": "prose", "marks": []}], "markDefs": []},
                {"_type": "block", "style": "h3", "children": [{"_type": "span", "text": "Detail", "marks": []}], "markDefs": []},
                {"_type": "block", "style": "h4", "children": [{"_type": "span", "text": "Too deep", "marks": []}], "markDefs": []},
                {"_type": "productBox", "productName": "X", "asin": "B000000000"}
            ]"#,
        );
        let toc = collect_toc(&input);
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0], TocItem { id: "first".into(), text: "First".into(), level: 2 });
        assert_eq!(toc[1], TocItem { id: "detail".into(), text: "Detail".into(), level: 3 });
    }

    #[test]
    fn duplicate_headings_keep_duplicate_ids() {
        let input = blocks(
            r#"[
                {"_type": "block", "style": "h2", "children": [{"_type": "span", "text": "Setup", "marks": []}], "markDefs": []},
                {"_type": "block", "style": "h2", "children": [{"_type": "span", "text": "Setup", "marks": []}], "markDefs": []}
            ]"#,
        );
        let toc = collect_toc(&input);
        assert_eq!(toc[0].id, toc[1].id);
    }

    #[test]
    fn empty_toc_renders_nothing() {
        assert!(render_toc(&[]).is_none());
    }

    #[test]
    fn rendered_toc_links_to_anchors() {
        let items = vec![TocItem { id: "first".into(), text: "First".into(), level: 2 }];
        let html = render_toc(&items).unwrap().into_string();
        assert!(html.contains(r##"<a href="#first">First</a>"##));
    }
}
