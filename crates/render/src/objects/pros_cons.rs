use maud::{html, Markup};
use serde::Deserialize;
use serde_json::Value;

use crate::Renderer;

#[derive(Deserialize)]
struct ProsConsList {
    title: Option<String>,
    #[serde(default)]
    pros: Vec<String>,
    #[serde(default)]
    cons: Vec<String>,
}

/// Two-column pros/cons layout. Renders nothing when both lists are empty.
pub(super) fn render(_renderer: &Renderer, value: &Value) -> Option<Markup> {
    let list: ProsConsList = serde_json::from_value(value.clone()).ok()?;
    if list.pros.is_empty() && list.cons.is_empty() {
        return None;
    }

    Some(html! {
        div.pros-cons {
            @if let Some(title) = &list.title { h3 { (title) } }
            div.pros-cons-columns {
                @if !list.pros.is_empty() {
                    div.pros {
                        h4 { "Pros" }
                        ul { @for pro in &list.pros { li { "✓ " (pro) } } }
                    }
                }
                @if !list.cons.is_empty() {
                    div.cons {
                        h4 { "Cons" }
                        ul { @for con in &list.cons { li { "✗ " (con) } } }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::{blocks, renderer};

    #[test]
    fn renders_both_columns() {
        let input = blocks(
            r#"[{"_type": "prosConsList", "title": "Verdict", "pros": ["cheap"], "cons": ["loud"]}]"#,
        );
        let html = renderer().render(&input).into_string();
        assert!(html.contains("Verdict"));
        assert!(html.contains("cheap"));
        assert!(html.contains("loud"));
    }

    #[test]
    fn pros_only() {
        let input = blocks(r#"[{"_type": "prosConsList", "pros": ["solid"]}]"#);
        let html = renderer().render(&input).into_string();
        assert!(html.contains("solid"));
        assert!(!html.contains("Cons"));
    }

    #[test]
    fn both_empty_renders_nothing() {
        let input = blocks(r#"[{"_type": "prosConsList", "title": "Nothing"}]"#);
        assert!(renderer().render(&input).into_string().is_empty());
    }
}
