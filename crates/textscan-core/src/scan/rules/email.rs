//! E-mail sanity check.

/// Check that an address has an `@` followed by a dotted domain.
///
/// This is deliberately weaker than the extraction pattern: it only rejects
/// strings without a domain part that could resolve.
pub fn validate_email(s: &str) -> bool {
    s.rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}
