//! Price metrics integration tests
//!
//! Covers the derived comparison: absolute change, guarded percent
//! change, and the full text-to-metrics path.

use proptest::prelude::*;
use shared::extract::extract_price_data;
use shared::models::{PriceComparison, PriceExtraction};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// End-to-end: response text through extraction to derived metrics
    #[test]
    fn test_text_to_comparison() {
        let text = "**💰 Current Price**: ₹2927 per Quintal\n\
                    **📊 Predicted Price**: ₹4500 per Quintal";
        let prices = extract_price_data(text);
        assert_eq!(prices.current_price, Some(2927));
        assert_eq!(prices.predicted_price, Some(4500));

        let comparison = PriceComparison::from_extraction(&prices).unwrap();
        assert_eq!(comparison.absolute_change, 1573);
        assert_eq!(comparison.percent_change, Some(53.7));
    }

    /// Zero current price: absolute change reported, percent suppressed
    #[test]
    fn test_zero_current_price_guard() {
        let prices = PriceExtraction {
            current_price: Some(0),
            predicted_price: Some(5000),
        };
        let comparison = PriceComparison::from_extraction(&prices).unwrap();
        assert_eq!(comparison.absolute_change, 5000);
        assert!(comparison.percent_change.is_none());
    }

    /// A partial extraction yields no comparison at all
    #[test]
    fn test_partial_extraction_no_comparison() {
        let prices = extract_price_data("Current Price: ₹1800");
        assert!(PriceComparison::from_extraction(&prices).is_none());
    }

    /// Suppressed percent change never serializes as a number
    #[test]
    fn test_suppressed_percent_is_absent_in_json() {
        let prices = PriceExtraction {
            current_price: Some(0),
            predicted_price: Some(5000),
        };
        let comparison = PriceComparison::from_extraction(&prices).unwrap();
        let json = serde_json::to_string(&comparison).unwrap();
        assert!(!json.contains("percent_change"));
        assert!(!json.contains("null"));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        /// Percent change is finite whenever it is present
        #[test]
        fn prop_percent_change_is_finite(
            current in 0u32..1_000_000,
            predicted in 0u32..1_000_000,
        ) {
            let prices = PriceExtraction {
                current_price: Some(current),
                predicted_price: Some(predicted),
            };
            let comparison = PriceComparison::from_extraction(&prices).unwrap();
            if let Some(percent) = comparison.percent_change {
                prop_assert!(percent.is_finite());
            } else {
                prop_assert_eq!(current, 0);
            }
        }

        /// Absolute change is exact integer arithmetic
        #[test]
        fn prop_absolute_change_exact(
            current in 0u32..1_000_000,
            predicted in 0u32..1_000_000,
        ) {
            let prices = PriceExtraction {
                current_price: Some(current),
                predicted_price: Some(predicted),
            };
            let comparison = PriceComparison::from_extraction(&prices).unwrap();
            prop_assert_eq!(
                comparison.absolute_change,
                i64::from(predicted) - i64::from(current)
            );
        }
    }
}
