use maud::{html, Markup};
use serde_json::Value;
use waypost_core::product::{amazon_product_url, Asin, ProductEntity};

use crate::rating::star_rating;
use crate::Renderer;

const DEFAULT_BUTTON_TEXT: &str = "Check Price on Amazon";

/// Amazon product callout: image, rating, price, pros/cons, affiliate link.
pub(super) fn render(renderer: &Renderer, value: &Value) -> Option<Markup> {
    let product: ProductEntity = serde_json::from_value(value.clone()).ok()?;
    if product.name.is_empty() {
        return None;
    }
    if let Err(err) = Asin::parse(&product.asin) {
        // Still rendered; the storefront link may just be dead.
        tracing::debug!(asin = %product.asin, error = %err, "product ASIN failed validation");
    }

    let url = amazon_product_url(
        &product.asin,
        product.amazon_region.as_deref(),
        renderer.affiliate_tag(),
    );
    let image_url = product
        .image
        .as_ref()
        .and_then(|image| renderer.images().resolve(image));
    let alt = product
        .image
        .as_ref()
        .and_then(|image| image.alt.clone())
        .unwrap_or_else(|| product.name.clone());
    let button_text = product.button_text.as_deref().unwrap_or(DEFAULT_BUTTON_TEXT);

    Some(html! {
        div.product-box {
            @if let Some(src) = &image_url {
                div.product-box-image { img src=(src) alt=(alt) loading="lazy"; }
            }
            div.product-box-details {
                h3 { (product.name) }
                @if let Some(rating) = product.rating.filter(|r| *r > 0.0) {
                    (star_rating(rating))
                }
                @if let Some(price) = &product.price {
                    div.product-price { (price) }
                }
                @if !product.pros.is_empty() || !product.cons.is_empty() {
                    div.product-pros-cons {
                        @if !product.pros.is_empty() {
                            div.pros {
                                h4 { "Pros" }
                                ul { @for pro in &product.pros { li { "✓ " (pro) } } }
                            }
                        }
                        @if !product.cons.is_empty() {
                            div.cons {
                                h4 { "Cons" }
                                ul { @for con in &product.cons { li { "✗ " (con) } } }
                            }
                        }
                    }
                }
                a.affiliate-button href=(url) target="_blank" rel="noopener noreferrer nofollow sponsored" {
                    (button_text)
                }
            }
        }
    })
}
