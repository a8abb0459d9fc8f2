//! Markup fragments shared between page handlers.

use chrono::{DateTime, Utc};
use maud::{html, Markup};
use waypost_core::document::{Post, PostSummary};
use waypost_core::links::BLOG_PREFIX;
use waypost_render::star_rating;

use crate::contact::ContactResponse;

pub(crate) fn post_grid(posts: &[PostSummary]) -> Markup {
    html! {
        div.post-grid {
            @for post in posts { (post_card(post)) }
        }
    }
}

pub(crate) fn post_card(post: &PostSummary) -> Markup {
    let href = format!("{BLOG_PREFIX}/{}", post.slug.current);
    html! {
        article.post-card {
            a href=(href) {
                @if let Some(url) = post.main_image.as_ref().and_then(|i| i.asset.url.clone()) {
                    img src=(url) alt=(post.main_image.as_ref().and_then(|i| i.alt.as_deref()).unwrap_or(&post.title)) loading="lazy";
                }
                div.post-card-body {
                    h2 { (post.title) }
                    @if let Some(excerpt) = &post.excerpt {
                        p { (excerpt) }
                    }
                    p.post-card-meta {
                        @if let Some(date) = &post.published_at { (format_date(date)) }
                        @if !post.categories.is_empty() {
                            " · " (post.categories.join(", "))
                        }
                    }
                }
            }
        }
    }
}

pub(crate) fn byline(post: &Post) -> Option<Markup> {
    let author = post.author.as_ref()?;
    let href = format!("/author/{}", author.slug.current);
    Some(html! {
        p.byline {
            "By " a href=(href) { (author.name) }
            @if let Some(date) = &post.published_at {
                " · " (format_date(date))
            }
        }
    })
}

pub(crate) fn affiliate_disclosure_notice() -> Markup {
    html! {
        aside.affiliate-disclosure {
            "This post may contain affiliate links. If you buy through them we may "
            "earn a commission, at no extra cost to you. "
            a href="/affiliate-disclosure" { "Learn more" }
            "."
        }
    }
}

pub(crate) fn overall_rating(post: &Post) -> Option<Markup> {
    let rating = post.product_rating.filter(|r| *r > 0.0)?;
    Some(html! {
        div.overall-rating {
            span { "Overall Rating" }
            (star_rating(rating))
        }
    })
}

/// The contact form, optionally showing the outcome of a submission.
pub(crate) fn contact_form(result: Option<&ContactResponse>) -> Markup {
    html! {
        @if let Some(response) = result {
            @let notice = if response.success { "form-notice success" } else { "form-notice failure" };
            p class=(notice) { (response.message) }
        }
        form.contact-form method="post" action="/contact" {
            input type="text" name="name" placeholder="Your name" required;
            input type="email" name="email" placeholder="Your email" required;
            input type="text" name="subject" placeholder="Subject" required;
            textarea name="message" rows="6" placeholder="Your message" required {}
            button type="submit" { "Send Message" }
        }
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
