/// Derive a URL-safe anchor identifier from heading text.
///
/// Lowercases the input, collapses every run of non-alphanumeric characters
/// into a single hyphen, and trims leading/trailing hyphens. Idempotent:
/// `slugify(slugify(x)) == slugify(x)`.
///
/// Two headings with identical text produce identical identifiers. That
/// collision is accepted; anchors are not de-duplicated.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Best Dog Shampoo"), "best-dog-shampoo");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("What's New — 2025 Edition?"), "what-s-new-2025-edition");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  Hello, World!  "), "hello-world");
    }

    #[test]
    fn idempotent() {
        for input in ["Best Dog Shampoo", "What's New — 2025?", "a--b", ""] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn identical_text_yields_identical_ids() {
        assert_eq!(slugify("Final Verdict"), slugify("Final Verdict"));
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
