use maud::{html, Markup};
use serde::Deserialize;
use serde_json::Value;
use waypost_core::product::{amazon_product_url, ProductEntity};

use crate::rating::star_rating;
use crate::Renderer;

#[derive(Deserialize)]
struct ComparisonTable {
    title: Option<String>,
    products: Option<Vec<ProductEntity>>,
}

const DEFAULT_TITLE: &str = "Product Comparison";

/// Side-by-side product comparison. Renders whatever products are present;
/// a minimum count is an authoring-time concern, not a render-time failure.
pub(super) fn render(renderer: &Renderer, value: &Value) -> Option<Markup> {
    let table: ComparisonTable = serde_json::from_value(value.clone()).ok()?;
    let products = table.products?;
    if products.is_empty() {
        return None;
    }
    let title = table.title.as_deref().unwrap_or(DEFAULT_TITLE);

    Some(html! {
        div.comparison-table {
            h3 { (title) }
            table {
                thead {
                    tr {
                        th { "Product" }
                        th { "Rating" }
                        th { "Price" }
                        th { "Features" }
                        th { }
                    }
                }
                tbody {
                    @for product in &products {
                        tr {
                            td.comparison-name {
                                @if let Some(src) = product.image.as_ref().and_then(|i| renderer.images().resolve(i)) {
                                    img src=(src) alt=(product.name) loading="lazy";
                                }
                                (product.name)
                            }
                            td {
                                @if let Some(rating) = product.rating.filter(|r| *r > 0.0) {
                                    (star_rating(rating))
                                }
                            }
                            td { @if let Some(price) = &product.price { (price) } }
                            td {
                                @if !product.features.is_empty() {
                                    ul { @for feature in &product.features { li { (feature) } } }
                                }
                            }
                            td {
                                a.affiliate-button
                                    href=(amazon_product_url(&product.asin, product.amazon_region.as_deref(), renderer.affiliate_tag()))
                                    target="_blank"
                                    rel="noopener noreferrer nofollow sponsored" {
                                    "View on Amazon"
                                }
                            }
                        }
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
    fn renders_all_products() {
        let input = blocks(
            r#"[{
                "_type": "comparisonTable",
                "title": "Top Picks",
                "products": [
                    {"name": "Alpha", "asin": "B000000001", "price": "$10", "features": ["light"]},
                    {"name": "Beta", "asin": "B000000002", "rating": 3.5}
                ]
            }]"#,
        );
        let html = renderer().render(&input).into_string();
        assert!(html.contains("Top Picks"));
        assert!(html.contains("Alpha"));
        assert!(html.contains("Beta"));
        assert!(html.contains("https://www.amazon.com/dp/B000000001"));
        assert!(html.contains("light"));
    }

    #[test]
    fn single_product_still_renders() {
        let input = blocks(
            r#"[{"_type": "comparisonTable", "products": [{"name": "Solo", "asin": "B000000003"}]}]"#,
        );
        let html = renderer().render(&input).into_string();
        assert!(html.contains("Solo"));
        assert!(html.contains("Product Comparison"));
    }

    #[test]
    fn missing_products_renders_nothing() {
        let input = blocks(r#"[{"_type": "comparisonTable", "title": "Empty"}]"#);
        assert!(renderer().render(&input).into_string().is_empty());
    }
}
