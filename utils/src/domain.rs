//! Display helpers for Starknet ID domains.

/// Number of characters kept when a domain is shortened.
const DOMAIN_DISPLAY_CHARS: usize = 10;

/// Shorten a domain for tooltips: `averyveryverylong.stark` -> `averyveryv...`.
pub fn minify_domain(domain: &str) -> String {
    if domain.chars().count() <= DOMAIN_DISPLAY_CHARS {
        return domain.to_string();
    }
    let head: String = domain.chars().take(DOMAIN_DISPLAY_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_domain_is_unchanged() {
        assert_eq!(minify_domain("ben.stark"), "ben.stark");
        assert_eq!(minify_domain(""), "");
    }

    #[test]
    fn long_domain_is_truncated() {
        assert_eq!(minify_domain("averyveryverylong.stark"), "averyveryv...");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(minify_domain("ééééééééééé.stark"), "éééééééééé...");
    }
}
