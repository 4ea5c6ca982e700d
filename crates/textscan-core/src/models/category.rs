//! The closed set of data kinds textscan can recognize.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// A recognizable kind of structured data.
///
/// Declaration order is the canonical order for iteration and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// E-mail address.
    Email,
    /// Telephone number, optionally with country and area code.
    Phone,
    /// Calendar date in day-first or year-first numeric form.
    Date,
    /// National identity number (bare digit run).
    NationalId,
    /// Postal code (bare digit run).
    PostalCode,
    /// Web address.
    Url,
    /// Vehicle registration plate.
    Plate,
}

impl Category {
    /// Every registered category, in canonical order.
    ///
    /// This is the default selection wherever a set of categories is optional.
    pub const ALL: [Category; 7] = [
        Category::Email,
        Category::Phone,
        Category::Date,
        Category::NationalId,
        Category::PostalCode,
        Category::Url,
        Category::Plate,
    ];

    /// Machine label, as accepted by [`FromStr`] and used in serialized output.
    pub fn label(self) -> &'static str {
        match self {
            Category::Email => "email",
            Category::Phone => "phone",
            Category::Date => "date",
            Category::NationalId => "national-id",
            Category::PostalCode => "postal-code",
            Category::Url => "url",
            Category::Plate => "plate",
        }
    }

    /// Human-readable name for result listings.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Email => "Email",
            Category::Phone => "Phone",
            Category::Date => "Date",
            Category::NationalId => "National ID",
            Category::PostalCode => "Postal code",
            Category::Url => "URL",
            Category::Plate => "Vehicle plate",
        }
    }

    /// Short description of the shape the category's rule extracts.
    pub fn shape(self) -> &'static str {
        match self {
            Category::Email => "local-part@domain.tld, case-insensitive",
            Category::Phone => "[+CC] [(area) | area] 6-8 digits, space or dash separated",
            Category::Date => "D/M/YYYY, D-M-YYYY or YYYY-M-D",
            Category::NationalId => "run of 6-12 digits",
            Category::PostalCode => "run of 5-6 digits",
            Category::Url => "[http(s)://][www.]label.label[/path?query]",
            Category::Plate => "ABC-123, ABC123 or AB123CD (uppercase)",
        }
    }

    /// Resolve a selection, where an empty selection means every category.
    pub fn resolve(selection: &[Category]) -> &[Category] {
        if selection.is_empty() {
            &ALL_CATEGORIES
        } else {
            selection
        }
    }
}

static ALL_CATEGORIES: [Category; 7] = Category::ALL;

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScanError::UnknownCategory(s.to_string()))
    }
}
