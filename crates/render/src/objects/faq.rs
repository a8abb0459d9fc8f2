use maud::{html, Markup, PreEscaped};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::Renderer;

#[derive(Deserialize)]
struct FaqSection {
    title: Option<String>,
    faqs: Option<Vec<FaqItem>>,
}

#[derive(Deserialize)]
struct FaqItem {
    #[serde(default)]
    question: String,
    #[serde(default)]
    answer: String,
}

const DEFAULT_TITLE: &str = "Frequently Asked Questions";

/// FAQ accordion plus FAQPage JSON-LD for rich search snippets. Renders
/// nothing when no faqs field is present.
pub(super) fn render(_renderer: &Renderer, value: &Value) -> Option<Markup> {
    let section: FaqSection = serde_json::from_value(value.clone()).ok()?;
    let faqs = section.faqs?;
    let title = section.title.as_deref().unwrap_or(DEFAULT_TITLE);

    let schema = json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": faqs.iter().map(|faq| json!({
            "@type": "Question",
            "name": faq.question,
            "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
        })).collect::<Vec<_>>(),
    });
    // `<` is escaped so author text can never break out of the script tag.
    let schema_json = schema.to_string().replace('<', "\\u003c");

    Some(html! {
        section.faq {
            script type="application/ld+json" { (PreEscaped(schema_json)) }
            h2 { (title) }
            @for faq in &faqs {
                details.faq-item {
                    summary { (faq.question) }
                    div.faq-answer { (faq.answer) }
                }
            }
        }
    })
}
