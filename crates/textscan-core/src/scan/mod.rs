//! Pattern extraction and validation pipeline.

pub mod rules;
mod validator;

pub use rules::PatternRegistry;
pub use validator::{analyze, analyze_annotated, analyze_with, validate, Analyzer, TextAnalyzer, ValidatorFn};
