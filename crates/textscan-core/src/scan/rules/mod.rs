//! Extraction patterns, the pattern registry and per-category validators.

pub mod dates;
pub mod email;
pub mod identifiers;
pub mod patterns;
pub mod phone;
pub mod plate;
pub mod registry;
pub mod url;

pub use dates::{parse_date, validate_date, DateFormat, DateOrder, DATE_FORMATS};
pub use email::validate_email;
pub use identifiers::{validate_national_id, validate_postal_code};
pub use phone::{count_digits, validate_phone};
pub use plate::validate_plate;
pub use registry::PatternRegistry;
pub use url::validate_url;
