//! Price prediction models

use serde::{Deserialize, Serialize};

/// Prices extracted from a model response, in rupees per quintal.
///
/// Each field is `None` when no extraction pattern matched. A missing
/// value is never represented as `0`, so a genuinely free crop and a
/// failed extraction remain distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceExtraction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_price: Option<u32>,
}

impl PriceExtraction {
    /// True when neither field was extracted
    pub fn is_empty(&self) -> bool {
        self.current_price.is_none() && self.predicted_price.is_none()
    }

    /// True when both fields were extracted
    pub fn is_complete(&self) -> bool {
        self.current_price.is_some() && self.predicted_price.is_some()
    }
}

/// Comparison derived from a complete price extraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceComparison {
    pub current_price: u32,
    pub predicted_price: u32,
    /// Predicted minus current, in rupees per quintal
    pub absolute_change: i64,
    /// Percent change rounded to one decimal place.
    /// `None` when the current price is zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_change: Option<f64>,
}
