//! Price extraction from model responses
//!
//! The price-prediction prompt asks the model for bold, emoji-marked
//! price lines, but real output drifts across calls. Each field is
//! therefore matched against an ordered cascade of patterns, strictest
//! first, and the first capture wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::PriceExtraction;

/// Extracts current and predicted prices from free-form model output
pub struct PriceExtractor {
    /// Cascade for the current-price field, strictest first
    current: [Regex; 3],
    /// Cascade for the predicted-price field, strictest first
    predicted: [Regex; 3],
}

impl PriceExtractor {
    pub fn new() -> Self {
        Self {
            current: [
                // Strict: full prompt-contract decoration, bold label with
                // emoji marker, rupee symbol, separators allowed in digits
                pattern(r"\*\*💰\s*Current\s+Price\*\*\s*:?\s*₹\s*([0-9][0-9,]*)"),
                // Bold: bold label, any or no emoji
                pattern(r"\*\*[^*\n]*Current\s+Price[^*\n]*\*\*\s*:?\s*₹\s*([0-9][0-9,]*)"),
                // Loose: label words anywhere, first rupee amount after them
                pattern(r"(?is)current\s+price.*?₹\s*([0-9][0-9,]*)"),
            ],
            predicted: [
                pattern(r"\*\*📊\s*Predicted\s+Price\*\*\s*:?\s*₹\s*([0-9][0-9,]*)"),
                pattern(r"\*\*[^*\n]*Predicted\s+Price[^*\n]*\*\*\s*:?\s*₹\s*([0-9][0-9,]*)"),
                pattern(r"(?is)predicted\s+price.*?₹\s*([0-9][0-9,]*)"),
            ],
        }
    }

    /// Extract both price fields. A field with no matching pattern is
    /// `None`; this never fails.
    pub fn extract(&self, text: &str) -> PriceExtraction {
        PriceExtraction {
            current_price: first_capture(&self.current, text),
            predicted_price: first_capture(&self.predicted, text),
        }
    }
}

impl Default for PriceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("invalid price pattern")
}

/// Try patterns in order, returning the first parsed capture
fn first_capture(cascade: &[Regex], text: &str) -> Option<u32> {
    cascade
        .iter()
        .find_map(|re| re.captures(text).and_then(|caps| parse_amount(&caps[1])))
}

/// Strip thousands separators from a captured digit run and parse it
fn parse_amount(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

static EXTRACTOR: LazyLock<PriceExtractor> = LazyLock::new(PriceExtractor::new);

/// Extract prices using the shared default extractor
pub fn extract_price_data(text: &str) -> PriceExtraction {
    EXTRACTOR.extract(text)
}
