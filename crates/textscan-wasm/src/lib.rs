//! WASM bindings for textscan.
//!
//! This crate provides WebAssembly bindings so a browser form can hand its
//! text to the extraction pipeline and render the result.

use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use textscan_core::{
    Analyzer, Category, Markers, PatternRegistry, ScanError, ScanSettings, TextAnalyzer, SAMPLE_TEXT,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Analyze text over every category.
///
/// Returns an object mapping each category label to its annotated matches,
/// e.g. `{ "date": ["29/02/2024 valid"], ... }`.
#[wasm_bindgen]
pub fn analyze(text: &str) -> Result<JsValue, JsValue> {
    to_js(&textscan_core::analyze_annotated(text))
}

/// Analyze text over every category, returning positions and parsed values.
#[wasm_bindgen(js_name = analyzeDetailed)]
pub fn analyze_detailed(text: &str) -> Result<JsValue, JsValue> {
    to_js(&textscan_core::analyze(text))
}

/// All matches of one category, by label.
#[wasm_bindgen(js_name = findAll)]
pub fn find_all(text: &str, category: &str) -> Result<Vec<String>, JsValue> {
    PatternRegistry::new().find_all(text, category).map_err(to_js_error)
}

/// Validate a single value against a category's rules.
#[wasm_bindgen]
pub fn validate(category: &str, value: &str) -> Result<bool, JsValue> {
    let category = parse_category(category).map_err(to_js_error)?;
    Ok(textscan_core::validate(category, value).valid)
}

/// The built-in demonstration text.
#[wasm_bindgen(js_name = sampleText)]
pub fn sample_text() -> String {
    SAMPLE_TEXT.to_string()
}

/// Labels of every recognized category.
#[wasm_bindgen]
pub fn categories() -> js_sys::Array {
    Category::ALL
        .iter()
        .map(|c| JsValue::from_str(c.label()))
        .collect()
}

/// Text scanner class for browser use, with its own category selection
/// and markers.
#[wasm_bindgen]
pub struct TextScanner {
    categories: Vec<Category>,
    markers: Markers,
}

#[wasm_bindgen]
impl TextScanner {
    /// Create a scanner over every category with `valid` / `invalid` markers.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            markers: Markers::default(),
        }
    }

    /// Set the markers appended to valid and invalid matches.
    #[wasm_bindgen(js_name = setMarkers)]
    pub fn set_markers(&mut self, valid: &str, invalid: &str) {
        self.markers = Markers {
            valid: valid.to_string(),
            invalid: invalid.to_string(),
        };
    }

    /// Restrict analysis to the given category labels; empty means all.
    #[wasm_bindgen(js_name = setCategories)]
    pub fn set_categories(&mut self, labels: Vec<String>) -> Result<(), JsValue> {
        self.categories = labels
            .iter()
            .map(|l| parse_category(l))
            .collect::<Result<_, _>>()
            .map_err(to_js_error)?;
        Ok(())
    }

    /// Analyze text and return annotated matches per category.
    #[wasm_bindgen]
    pub fn analyze(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.annotate(text))
    }
}

impl TextScanner {
    fn annotate(&self, text: &str) -> BTreeMap<Category, Vec<String>> {
        TextAnalyzer::new()
            .with_settings(ScanSettings::only(self.categories.iter().copied()))
            .analyze(text)
            .annotate(&self.markers)
    }
}

impl Default for TextScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_category(label: &str) -> Result<Category, ScanError> {
    label.parse()
}

/// Serialize maps as plain objects rather than ES2015 `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js_error(err: ScanError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
