//! WebAssembly module for the KrishiMitra Platform
//!
//! Provides client-side computation for the dashboard:
//! - Price and yield extraction from model responses
//! - Derived price comparison metrics
//! - Comparison chart rendering (SVG)
//!
//! Extraction results cross the boundary as JSON strings; misses are
//! `null`, never sentinel zeros.

use wasm_bindgen::prelude::*;

use shared::chart::{render_price_chart, render_yield_chart};
use shared::extract::{extract_price_data, extract_yield_data};
use shared::metrics::best_choice;
use shared::models::{CropYield, PriceComparison};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Extract current/predicted prices from a model response.
/// Returns a JSON object; fields that could not be extracted are absent.
#[wasm_bindgen]
pub fn extract_prices(response_text: &str) -> Result<String, JsValue> {
    let prices = extract_price_data(response_text);
    serde_json::to_string(&prices).map_err(to_js_error)
}

/// Extract ranked yield entries from a model response.
/// Returns a JSON array sorted by probability descending, or `null`
/// when nothing could be extracted.
#[wasm_bindgen]
pub fn extract_yields(response_text: &str) -> Result<String, JsValue> {
    let entries = extract_yield_data(response_text);
    serde_json::to_string(&entries).map_err(to_js_error)
}

/// Derive the price comparison (absolute and percent change) from a
/// model response. Returns `null` unless both prices were extracted;
/// `percent_change` is absent when the current price is zero.
#[wasm_bindgen]
pub fn derive_price_comparison(response_text: &str) -> Result<String, JsValue> {
    let prices = extract_price_data(response_text);
    let comparison = PriceComparison::from_extraction(&prices);
    serde_json::to_string(&comparison).map_err(to_js_error)
}

/// Name of the top-ranked crop in a model response, or `null`
#[wasm_bindgen]
pub fn best_crop(response_text: &str) -> Option<String> {
    let entries = extract_yield_data(response_text)?;
    best_choice(&entries).map(|entry| entry.name.clone())
}

/// Render the price comparison chart for a model response.
/// Returns an SVG document, or `null` when extraction was incomplete.
#[wasm_bindgen]
pub fn price_chart_svg(response_text: &str, crop: &str, district: &str) -> Option<String> {
    let prices = extract_price_data(response_text);
    let comparison = PriceComparison::from_extraction(&prices)?;
    Some(render_price_chart(&comparison, crop, district))
}

/// Render the yield comparison chart for a model response.
/// Returns an SVG document, or `null` when nothing was extracted.
#[wasm_bindgen]
pub fn yield_chart_svg(response_text: &str) -> Option<String> {
    let entries = extract_yield_data(response_text)?;
    Some(render_yield_chart(&entries))
}

/// Render a yield chart from already-extracted entries (JSON array)
#[wasm_bindgen]
pub fn yield_chart_from_entries(entries_json: &str) -> Result<String, JsValue> {
    let entries: Vec<CropYield> = serde_json::from_str(entries_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid entries JSON: {}", e)))?;
    Ok(render_yield_chart(&entries))
}

fn to_js_error(e: serde_json::Error) -> JsValue {
    JsValue::from_str(&format!("Serialization error: {}", e))
}
