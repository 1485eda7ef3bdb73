//! WASM bindings for numeric value extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use numex_core::{ExtractionMatch, NumericFinding};

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

/// Extract every numeric value from text.
///
/// Returns an array of `{value, type, unit?, symbol?, source}` objects.
#[wasm_bindgen]
pub fn extract_numeric_values(text: &str) -> Result<JsValue, JsValue> {
    to_js(&numex_core::extract_numeric_values(text))
}

/// Extract the numeric values among the requested entity names.
///
/// Names other than NUMBER, MEASURE and MONEY are ignored; an empty list
/// means all kinds.
#[wasm_bindgen]
pub fn extract_numeric_values_filtered(text: &str, kinds: Vec<String>) -> Result<JsValue, JsValue> {
    let extractor = numex_core::NumericExtractor::new();
    to_js(&numex_core::extract_for_entities(&extractor, text, &kinds))
}

/// Parse a spelled-out Portuguese numeral ("trezentos e cinco" -> 305).
#[wasm_bindgen]
pub fn parse_word_numeral(text: &str) -> Option<u32> {
    numex_core::parse_word_numeral(text)
}

/// Finding with its byte offsets in the input.
#[derive(Debug, Serialize)]
struct LocatedFinding {
    #[serde(flatten)]
    finding: NumericFinding,
    start: usize,
    end: usize,
}

impl From<ExtractionMatch<NumericFinding>> for LocatedFinding {
    fn from(m: ExtractionMatch<NumericFinding>) -> Self {
        Self {
            start: m.position.start,
            end: m.position.end,
            finding: m.value,
        }
    }
}

/// Numeric extractor class for browser use.
#[wasm_bindgen(js_name = NumericExtractor)]
pub struct WasmNumericExtractor {
    entities: Vec<String>,
    word_numerals: bool,
}

#[wasm_bindgen(js_class = NumericExtractor)]
impl WasmNumericExtractor {
    /// Create an extractor reporting every kind.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            word_numerals: true,
        }
    }

    /// Restrict the reported entity names. An empty list reports all kinds.
    #[wasm_bindgen]
    pub fn set_kinds(&mut self, kinds: Vec<String>) {
        self.entities = kinds;
    }

    /// Enable or disable spelled-out numerals.
    #[wasm_bindgen]
    pub fn set_word_numerals(&mut self, enabled: bool) {
        self.word_numerals = enabled;
    }

    /// Extract findings from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let findings: Vec<NumericFinding> =
            self.matches(text).into_iter().map(|m| m.value).collect();
        to_js(&findings)
    }

    /// Extract findings with their `start` and `end` byte offsets.
    #[wasm_bindgen]
    pub fn extract_with_spans(&self, text: &str) -> Result<JsValue, JsValue> {
        let located: Vec<LocatedFinding> =
            self.matches(text).into_iter().map(LocatedFinding::from).collect();
        to_js(&located)
    }
}

impl WasmNumericExtractor {
    fn matches(&self, text: &str) -> Vec<ExtractionMatch<NumericFinding>> {
        numex_core::NumericExtractor::new()
            .with_word_numerals(self.word_numerals)
            .for_entities(&self.entities)
            .map(|extractor| extractor.extract_matches(text))
            .unwrap_or_default()
    }
}

impl Default for WasmNumericExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize to plain JS objects rather than `Map`s.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
