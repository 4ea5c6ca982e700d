//! Pattern registry: one compiled rule per category.

use std::collections::BTreeMap;

use regex::Regex;
use tracing::trace;

use super::patterns::{DATE, EMAIL, NATIONAL_ID, PHONE, PLATE, POSTAL_CODE, URL};
use crate::error::Result;
use crate::models::{Category, Match};

/// Registry mapping every [`Category`] to its extraction rule.
///
/// The rules are compiled once per process and never mutated, so a registry
/// can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRegistry;

impl PatternRegistry {
    pub fn new() -> Self {
        Self
    }

    /// The compiled rule for a category.
    pub fn rule(&self, category: Category) -> &'static Regex {
        match category {
            Category::Email => &*EMAIL,
            Category::Phone => &*PHONE,
            Category::Date => &*DATE,
            Category::NationalId => &*NATIONAL_ID,
            Category::PostalCode => &*POSTAL_CODE,
            Category::Url => &*URL,
            Category::Plate => &*PLATE,
        }
    }

    /// All non-overlapping matches of a category's rule, left to right.
    pub fn find(&self, text: &str, category: Category) -> Vec<Match> {
        self.rule(category)
            .find_iter(text)
            .map(|m| {
                trace!(%category, start = m.start(), text = m.as_str(), "pattern matched");
                Match::new(category, m.as_str(), m.start(), m.end())
            })
            .collect()
    }

    /// Matches for each requested category.
    ///
    /// An empty `categories` slice selects every registered category.
    /// Categories without matches are present with an empty vector.
    pub fn find_multiple(&self, text: &str, categories: &[Category]) -> BTreeMap<Category, Vec<Match>> {
        Category::resolve(categories)
            .iter()
            .map(|&category| (category, self.find(text, category)))
            .collect()
    }

    /// Matched substrings of the category named by `label`.
    ///
    /// Fails with [`ScanError::UnknownCategory`](crate::ScanError::UnknownCategory)
    /// when `label` does not name a registered category.
    pub fn find_all(&self, text: &str, label: &str) -> Result<Vec<String>> {
        let category: Category = label.parse()?;
        Ok(self.find(text, category).into_iter().map(|m| m.text).collect())
    }

    /// Matched substrings for each requested category.
    ///
    /// An empty `categories` slice selects every registered category.
    pub fn find_all_multiple(&self, text: &str, categories: &[Category]) -> BTreeMap<Category, Vec<String>> {
        self.find_multiple(text, categories)
            .into_iter()
            .map(|(category, matches)| (category, matches.into_iter().map(|m| m.text).collect()))
            .collect()
    }
}
