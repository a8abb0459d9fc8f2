use maud::{html, Markup};

const STAR_PATH: &str = "M10 15l-5.878 3.09 1.123-6.545L.489 6.91l6.572-.955L10 0l2.939 5.955 6.572.955-4.756 4.635 1.123 6.545z";
const MAX_STARS: u8 = 5;

/// Visual 0-5 star rating with the numeric value, one decimal shown.
/// Fractional ratings get a half star.
pub fn star_rating(rating: f64) -> Markup {
    html! {
        span.star-rating {
            @for i in 1..=MAX_STARS {
                @let fill = if rating >= f64::from(i) {
                    "full"
                } else if rating > f64::from(i - 1) {
                    "half"
                } else {
                    "empty"
                };
                svg class={"star star-" (fill)} viewBox="0 0 20 20" aria-hidden="true" {
                    path d=(STAR_PATH) {}
                }
            }
            span.star-value { (format!("{rating:.1}")) " / 5" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_rating_has_no_half_star() {
        let html = star_rating(4.0).into_string();
        assert_eq!(html.matches("star-full").count(), 4);
        assert_eq!(html.matches("star-half").count(), 0);
        assert_eq!(html.matches("star-empty").count(), 1);
        assert!(html.contains("4.0 / 5"));
    }

    #[test]
    fn fractional_rating_gets_half_star() {
        let html = star_rating(3.5).into_string();
        assert_eq!(html.matches("star-full").count(), 3);
        assert_eq!(html.matches("star-half").count(), 1);
        assert_eq!(html.matches("star-empty").count(), 1);
    }

    #[test]
    fn zero_rating_is_all_empty() {
        let html = star_rating(0.0).into_string();
        assert_eq!(html.matches("star-empty").count(), 5);
    }
}
