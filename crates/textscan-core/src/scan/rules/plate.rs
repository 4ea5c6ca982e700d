//! Vehicle plate validation.

use super::patterns::PLATE_EXACT;

/// Check that the whole string is a plate: `ABC-123`, `ABC123` or `AB123CD`.
pub fn validate_plate(s: &str) -> bool {
    PLATE_EXACT.is_match(s)
}
