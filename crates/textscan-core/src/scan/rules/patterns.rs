//! Compiled extraction patterns, one per category, plus the anchored shapes
//! some validators re-check against.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email: local-part@labels.tld, tld at least two letters
    pub static ref EMAIL: Regex = Regex::new(
        r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b"
    ).unwrap();

    // Phone: optional +CC, optional (area) or bare area code, 6-8 trailing digits.
    // `+` and `(` start the match themselves; bare digits start at a word boundary.
    // After a country code the area code may follow without a separator.
    // Digit classes are ASCII-only throughout, matching what the validators accept.
    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+[0-9]{1,3}[ -]?(?:\([0-9]{2,3}\)[ -]?|[0-9]{2,4}[ -]?)?|\([0-9]{2,3}\)[ -]?|\b[0-9]{2,4}[ -]?|\b)[0-9]{6,8}\b"
    ).unwrap();

    // Dates: D/M/YYYY, D-M-YYYY or YYYY-M-D
    pub static ref DATE: Regex = Regex::new(
        r"\b(?:[0-3]?[0-9][/-][01]?[0-9][/-][0-9]{4}|[0-9]{4}-[01]?[0-9]-[0-3]?[0-9])\b"
    ).unwrap();

    // National ID: bare run of 6-12 digits
    pub static ref NATIONAL_ID: Regex = Regex::new(
        r"\b[0-9]{6,12}\b"
    ).unwrap();

    // Postal code: bare run of 5 or 6 digits (overlaps NATIONAL_ID on 6 digits)
    pub static ref POSTAL_CODE: Regex = Regex::new(
        r"\b[0-9]{5,6}\b"
    ).unwrap();

    // URL: [scheme][www.]label(.label)+[path/query]
    pub static ref URL: Regex = Regex::new(
        r"\b(?:https?://)?(?:www\.)?[\w-]+(?:\.[\w-]+)+[\w\-._~:/?#@!$&'()*+,;=%]*\b"
    ).unwrap();

    // Plates: ABC-123, ABC123 (cars) or AB123CD (motorcycles)
    pub static ref PLATE: Regex = Regex::new(
        r"\b(?:[A-Z]{3}-?[0-9]{3}|[A-Z]{2}[0-9]{3}[A-Z]{2})\b"
    ).unwrap();

    pub static ref PLATE_EXACT: Regex = Regex::new(
        r"^(?:[A-Z]{3}-?[0-9]{3}|[A-Z]{2}[0-9]{3}[A-Z]{2})$"
    ).unwrap();
}
