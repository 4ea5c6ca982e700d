//! Data models: categories, configuration and analysis results.

pub mod category;
pub mod config;
pub mod result;

pub use category::Category;
pub use config::{Markers, OutputConfig, ScanConfig, ScanSettings};
pub use result::{AnalysisResult, CheckedMatch, Match, ValidationOutcome};
