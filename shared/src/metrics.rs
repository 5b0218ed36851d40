//! Metrics derived from extracted data

use crate::models::{CropYield, PriceComparison, PriceExtraction};

impl PriceComparison {
    /// Derive a comparison from an extraction. Requires both prices;
    /// an incomplete extraction yields `None` so the UI can show a
    /// "data unavailable" state instead of a chart built on sentinels.
    pub fn from_extraction(prices: &PriceExtraction) -> Option<Self> {
        let current = prices.current_price?;
        let predicted = prices.predicted_price?;

        let absolute_change = i64::from(predicted) - i64::from(current);
        // Percent change is undefined for a zero current price. The
        // guard is mandatory: an unguarded division here renders as
        // Infinity/NaN in the dashboard.
        let percent_change = (current > 0).then(|| {
            let raw = absolute_change as f64 / f64::from(current) * 100.0;
            round_one_decimal(raw)
        });

        Some(Self {
            current_price: current,
            predicted_price: predicted,
            absolute_change,
            percent_change,
        })
    }
}

/// Head of an already-sorted yield sequence; ties keep extraction order
pub fn best_choice(entries: &[CropYield]) -> Option<&CropYield> {
    entries.first()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
