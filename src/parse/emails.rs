use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email regex is valid")
});

/// Placeholder addresses the harvesting tools print regardless of target:
/// the tool author's domain, plus anything on a reserved example domain.
const DENYLISTED_SUBSTRINGS: &[&str] = &[
    "@edge-security.com",
    "example.com",
    "example.org",
    "example.net",
];

/// Scan free-form text for email-shaped substrings.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn is_denylisted(address: &str) -> bool {
    let lower = address.to_lowercase();
    DENYLISTED_SUBSTRINGS.iter().any(|s| lower.contains(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_addresses_in_noise() {
        let text = "contact: alice@corp.io (primary), bob.smith@dev.corp.io\nno-match-here";
        assert_eq!(
            extract_emails(text),
            vec!["alice@corp.io", "bob.smith@dev.corp.io"]
        );
    }

    #[test]
    fn denylist_covers_author_and_example_domains() {
        assert!(is_denylisted("cmartorella@edge-security.com"));
        assert!(is_denylisted("someone@example.com"));
        assert!(is_denylisted("SOMEONE@EXAMPLE.ORG"));
        assert!(!is_denylisted("alice@corp.io"));
    }
}
