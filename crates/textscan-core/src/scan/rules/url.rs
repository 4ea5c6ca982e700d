//! URL validation.

const URL_PREFIXES: [&str; 3] = ["http://", "https://", "www."];

/// Check that a URL carries an explicit scheme or a `www.` host.
pub fn validate_url(s: &str) -> bool {
    URL_PREFIXES.iter().any(|prefix| s.starts_with(prefix))
}
