//! Robots endpoint: allow everything except the authoring studio, and
//! point crawlers at the sitemap.

use axum::extract::State;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/robots.txt", get(robots))
}

async fn robots(State(state): State<AppState>) -> String {
    robots_txt(&state.config().base_url)
}

fn robots_txt(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!(
        "User-agent: *\nAllow: /\nDisallow: /studio/\n\nSitemap: {base}/sitemap.xml\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_all_but_studio() {
        let txt = robots_txt("https://example.com/");
        assert!(txt.contains("User-agent: *"));
        assert!(txt.contains("Allow: /"));
        assert!(txt.contains("Disallow: /studio/"));
        assert!(txt.contains("Sitemap: https://example.com/sitemap.xml"));
    }
}
