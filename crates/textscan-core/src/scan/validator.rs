//! Semantic validation of matches and the top-level analysis.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::debug;

use super::rules::{
    parse_date, validate_email, validate_national_id, validate_phone, validate_plate,
    validate_postal_code, validate_url, PatternRegistry,
};
use crate::models::{
    AnalysisResult, Category, CheckedMatch, Markers, Match, ScanSettings, ValidationOutcome,
};

/// A validator: a total predicate over a matched string.
pub type ValidatorFn = fn(&str) -> ValidationOutcome;

impl Category {
    /// The validator for this category.
    pub fn validator(self) -> ValidatorFn {
        match self {
            Category::Date => |s| parse_date(s).map_or_else(ValidationOutcome::invalid, ValidationOutcome::with_date),
            Category::Email => |s| ValidationOutcome::from_bool(validate_email(s)),
            Category::Phone => |s| ValidationOutcome::from_bool(validate_phone(s)),
            Category::NationalId => |s| ValidationOutcome::from_bool(validate_national_id(s)),
            Category::PostalCode => |s| ValidationOutcome::from_bool(validate_postal_code(s)),
            Category::Url => |s| ValidationOutcome::from_bool(validate_url(s)),
            Category::Plate => |s| ValidationOutcome::from_bool(validate_plate(s)),
        }
    }
}

/// Validate a single string as a value of `category`.
pub fn validate(category: Category, value: &str) -> ValidationOutcome {
    (category.validator())(value)
}

/// Trait for text analyzers.
pub trait Analyzer {
    /// Extract and validate every match of the configured categories.
    fn analyze(&self, text: &str) -> AnalysisResult;
}

/// Analyzer combining the pattern registry with per-category validators.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    registry: PatternRegistry,
    settings: ScanSettings,
}

impl TextAnalyzer {
    /// Create an analyzer over every category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the analysis settings.
    pub fn with_settings(mut self, settings: ScanSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Restrict the analysis to the given categories.
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.settings = ScanSettings::only(categories);
        self
    }

    fn check(&self, matched: Match) -> CheckedMatch {
        let outcome = validate(matched.category, &matched.text);
        CheckedMatch { matched, outcome }
    }
}

impl Analyzer for TextAnalyzer {
    fn analyze(&self, text: &str) -> AnalysisResult {
        let start = Instant::now();
        let categories = self.settings.categories();

        let entries: BTreeMap<Category, Vec<CheckedMatch>> = self
            .registry
            .find_multiple(text, categories)
            .into_iter()
            .map(|(category, matches)| {
                let checked: Vec<CheckedMatch> = matches.into_iter().map(|m| self.check(m)).collect();
                let valid = checked.iter().filter(|c| c.outcome.valid).count();
                debug!(%category, found = checked.len(), valid, "category analyzed");
                (category, checked)
            })
            .collect();

        let result = AnalysisResult::new(entries);
        debug!(
            "Analyzed {} bytes across {} categories: {} matches in {:?}",
            text.len(),
            categories.len(),
            result.total_matches(),
            start.elapsed()
        );
        result
    }
}

/// Analyze `text` over every category.
pub fn analyze(text: &str) -> AnalysisResult {
    TextAnalyzer::new().analyze(text)
}

/// Analyze `text` over the categories selected by `settings`.
pub fn analyze_with(text: &str, settings: &ScanSettings) -> AnalysisResult {
    TextAnalyzer::new().with_settings(settings.clone()).analyze(text)
}

/// Analyze `text` over every category and annotate matches with the default
/// `valid` / `invalid` markers.
pub fn analyze_annotated(text: &str) -> BTreeMap<Category, Vec<String>> {
    analyze(text).annotate(&Markers::default())
}
