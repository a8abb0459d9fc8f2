//! Block-level traversal: paragraphs, headings, blockquotes, and the
//! grouping of consecutive list-item blocks into nested lists.

use maud::{html, Markup};
use waypost_core::content::{Block, ListKind, TextBlock, TextStyle};
use waypost_core::slug::slugify;

use crate::marks::render_spans;
use crate::Renderer;

pub(crate) fn render_blocks(renderer: &Renderer, blocks: &[Block]) -> Markup {
    let mut parts: Vec<Markup> = Vec::with_capacity(blocks.len());
    let mut i = 0;

    while i < blocks.len() {
        match &blocks[i] {
            Block::Text(text) if text.list_item.is_some() => {
                // Collect the whole run of consecutive list items.
                let start = i;
                while i < blocks.len()
                    && matches!(&blocks[i], Block::Text(t) if t.list_item.is_some())
                {
                    i += 1;
                }
                let items: Vec<&TextBlock> = blocks[start..i]
                    .iter()
                    .filter_map(|b| match b {
                        Block::Text(t) => Some(t),
                        Block::Object(_) => None,
                    })
                    .collect();
                parts.push(render_list(&items, 1));
            }
            Block::Text(text) => {
                parts.push(render_text_block(text));
                i += 1;
            }
            Block::Object(object) => {
                // Unregistered object types render nothing, by contract.
                if let Some(markup) = renderer.object_registry().render(renderer, object) {
                    parts.push(markup);
                }
                i += 1;
            }
        }
    }

    html! { @for part in &parts { (part) } }
}

fn render_text_block(block: &TextBlock) -> Markup {
    let children = render_spans(block);

    if let Some(level) = block.style.heading_level() {
        return render_heading(level, block, children);
    }

    match block.style {
        TextStyle::Blockquote => html! { blockquote { (children) } },
        _ => html! { p { (children) } },
    }
}

/// Headings carry a stable anchor id derived from their text. Identical
/// heading text yields identical ids; collisions are accepted.
fn render_heading(level: u8, block: &TextBlock, children: Markup) -> Markup {
    let id = slugify(&block.plain_text());
    let anchor = html! {
        a.heading-anchor href={"#" (id)} aria-label="Anchor" { "#" }
    };
    match level {
        1 => html! { h1 id=(id) { (children) (anchor) } },
        2 => html! { h2 id=(id) { (children) (anchor) } },
        3 => html! { h3 id=(id) { (children) (anchor) } },
        4 => html! { h4 id=(id) { (children) (anchor) } },
        5 => html! { h5 id=(id) { (children) (anchor) } },
        _ => html! { h6 id=(id) { (children) (anchor) } },
    }
}

/// Render one run of list items at the given nesting level. Items deeper
/// than the current level become a nested list inside the preceding item.
fn render_list(items: &[&TextBlock], level: u8) -> Markup {
    let kind = items
        .iter()
        .find(|t| t.level <= level)
        .or_else(|| items.first())
        .and_then(|t| t.list_item)
        .unwrap_or(ListKind::Bullet);

    let mut list_items: Vec<Markup> = Vec::new();
    let mut i = 0;

    while i < items.len() {
        if items[i].level <= level {
            let mut j = i + 1;
            while j < items.len() && items[j].level > level {
                j += 1;
            }
            let content = render_spans(items[i]);
            let nested = &items[i + 1..j];
            list_items.push(html! {
                li {
                    (content)
                    @if !nested.is_empty() { (render_list(nested, level + 1)) }
                }
            });
            i = j;
        } else {
            // Run starts deeper than the current level; wrap it as-is.
            let mut j = i;
            while j < items.len() && items[j].level > level {
                j += 1;
            }
            list_items.push(html! { li { (render_list(&items[i..j], level + 1)) } });
            i = j;
        }
    }

    match kind {
        ListKind::Number => html! { ol { @for li in &list_items { (li) } } },
        _ => html! { ul { @for li in &list_items { (li) } } },
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{blocks, renderer};

    #[test]
    fn paragraph_and_heading_order_preserved() {
        let input = blocks(
            r#"[
                {"_type": "block", "style": "h2", "children": [{"_type": "span", "text": "First Section", "marks": []}], "markDefs": []},
                {"_type": "block", "style": "normal", "children": [{"_type": "span", "text": "Body text.", "marks": []}], "markDefs": []}
            ]"#,
        );
        let html = renderer().render(&input).into_string();
        assert!(html.contains(r#"<h2 id="first-section">"#));
        assert!(html.contains("<p>Body text.</p>"));
        assert!(html.find("first-section").unwrap() < html.find("Body text.").unwrap());
    }

    #[test]
    fn identical_headings_share_an_id() {
        let input = blocks(
            r#"[
                {"_type": "block", "style": "h2", "children": [{"_type": "span", "text": "Verdict", "marks": []}], "markDefs": []},
                {"_type": "block", "style": "h2", "children": [{"_type": "span", "text": "Verdict", "marks": []}], "markDefs": []}
            ]"#,
        );
        let html = renderer().render(&input).into_string();
        assert_eq!(html.matches(r#"id="verdict""#).count(), 2);
    }

    #[test]
    fn blockquote_renders() {
        let input = blocks(
            r#"[{"_type": "block", "style": "blockquote", "children": [{"_type": "span", "text": "quoted", "marks": []}], "markDefs": []}]"#,
        );
        let html = renderer().render(&input).into_string();
        assert!(html.contains("<blockquote>quoted</blockquote>"));
    }

    #[test]
    fn consecutive_bullets_group_into_one_list() {
        let input = blocks(
            r#"[
                {"_type": "block", "listItem": "bullet", "children": [{"_type": "span", "text": "one", "marks": []}], "markDefs": []},
                {"_type": "block", "listItem": "bullet", "children": [{"_type": "span", "text": "two", "marks": []}], "markDefs": []},
                {"_type": "block", "style": "normal", "children": [{"_type": "span", "text": "after", "marks": []}], "markDefs": []}
            ]"#,
        );
        let html = renderer().render(&input).into_string();
        assert_eq!(html.matches("<ul>").count(), 1);
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<li>two</li>"));
        assert!(html.contains("<p>after</p>"));
    }

    #[test]
    fn numbered_list_uses_ol() {
        let input = blocks(
            r#"[
                {"_type": "block", "listItem": "number", "children": [{"_type": "span", "text": "step", "marks": []}], "markDefs": []}
            ]"#,
        );
        let html = renderer().render(&input).into_string();
        assert!(html.contains("<ol><li>step</li></ol>"));
    }

    #[test]
    fn deeper_levels_nest() {
        let input = blocks(
            r#"[
                {"_type": "block", "listItem": "bullet", "level": 1, "children": [{"_type": "span", "text": "parent", "marks": []}], "markDefs": []},
                {"_type": "block", "listItem": "bullet", "level": 2, "children": [{"_type": "span", "text": "child", "marks": []}], "markDefs": []},
                {"_type": "block", "listItem": "bullet", "level": 1, "children": [{"_type": "span", "text": "sibling", "marks": []}], "markDefs": []}
            ]"#,
        );
        let html = renderer().render(&input).into_string();
        assert_eq!(html.matches("<ul>").count(), 2);
        let parent = html.find("parent").unwrap();
        let child = html.find("child").unwrap();
        let sibling = html.find("sibling").unwrap();
        assert!(parent < child && child < sibling);
        // the nested list sits inside the parent's <li>
        let parent_li_close = html[parent..].find("</li>").unwrap() + parent;
        assert!(child < parent_li_close);
    }

    #[test]
    fn unknown_style_renders_as_paragraph() {
        let input = blocks(
            r#"[{"_type": "block", "style": "mystery", "children": [{"_type": "span", "text": "text", "marks": []}], "markDefs": []}]"#,
        );
        let html = renderer().render(&input).into_string();
        assert!(html.contains("<p>text</p>"));
    }
}
