//! Core library for textscan.
//!
//! This crate provides:
//! - A registry of compiled extraction patterns, one per [`Category`]
//! - Per-category semantic validators layered over syntactic matches
//! - [`analyze`], which extracts and validates every category in one pass
//! - Configuration and result models shared by the front ends

pub mod error;
pub mod models;
pub mod sample;
pub mod scan;

pub use error::{Result, ScanError};
pub use models::{AnalysisResult, Category, CheckedMatch, Markers, Match, ScanConfig, ScanSettings, ValidationOutcome};
pub use sample::SAMPLE_TEXT;
pub use scan::{analyze, analyze_annotated, analyze_with, validate, Analyzer, PatternRegistry, TextAnalyzer};
