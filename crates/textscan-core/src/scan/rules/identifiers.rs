//! National ID and postal code validation.

fn all_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Check that a national ID is 6 to 12 digits and nothing else.
pub fn validate_national_id(s: &str) -> bool {
    (6..=12).contains(&s.len()) && all_digits(s)
}

/// Check that a postal code is 5 or 6 digits, ignoring surrounding whitespace.
pub fn validate_postal_code(s: &str) -> bool {
    let code = s.trim();
    matches!(code.len(), 5 | 6) && all_digits(code)
}
