//! Match and analysis result types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::config::Markers;

/// A substring extracted from input text by a category's rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Category whose rule produced the match.
    pub category: Category,
    /// Matched text.
    pub text: String,
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

impl Match {
    pub fn new(category: Category, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            category,
            text: text.into(),
            start,
            end,
        }
    }
}

/// Result of running a category's validator over a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the match is semantically valid.
    pub valid: bool,
    /// Calendar date derived while validating, for dates only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self { valid: true, date: None }
    }

    pub fn invalid() -> Self {
        Self { valid: false, date: None }
    }

    pub fn from_bool(valid: bool) -> Self {
        Self { valid, date: None }
    }

    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            valid: true,
            date: Some(date),
        }
    }
}

/// A match together with its validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedMatch {
    #[serde(flatten)]
    pub matched: Match,
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
}

impl CheckedMatch {
    /// The matched text followed by its validity marker.
    pub fn annotated(&self, markers: &Markers) -> String {
        format!(
            "{} {}",
            self.matched.text,
            markers.for_validity(self.outcome.valid)
        )
    }
}

/// Per-category checked matches for one analyzed text.
///
/// Every analyzed category has an entry, empty when nothing matched. Within
/// a category, matches keep their left-to-right order in the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    entries: BTreeMap<Category, Vec<CheckedMatch>>,
}

impl AnalysisResult {
    pub(crate) fn new(entries: BTreeMap<Category, Vec<CheckedMatch>>) -> Self {
        Self { entries }
    }

    /// Matches for a category, or `None` if it was not analyzed.
    pub fn get(&self, category: Category) -> Option<&[CheckedMatch]> {
        self.entries.get(&category).map(Vec::as_slice)
    }

    /// Iterate analyzed categories in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CheckedMatch])> {
        self.entries.iter().map(|(c, m)| (*c, m.as_slice()))
    }

    /// Categories that were analyzed.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    /// Total number of matches across all categories.
    pub fn total_matches(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// True when no category produced a match.
    pub fn is_empty(&self) -> bool {
        self.total_matches() == 0
    }

    /// Render every match as `"<text> <marker>"`, grouped by category.
    pub fn annotate(&self, markers: &Markers) -> BTreeMap<Category, Vec<String>> {
        self.entries
            .iter()
            .map(|(category, matches)| {
                let annotated = matches.iter().map(|m| m.annotated(markers)).collect();
                (*category, annotated)
            })
            .collect()
    }
}
