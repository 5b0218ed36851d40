//! Crop recommendation models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Qualitative match tier for a recommended crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Yield probability 80% and above
    BestMatch,
    /// Yield probability 70-79%
    GoodMatch,
    /// Yield probability below 70%
    ModerateMatch,
}

impl MatchStatus {
    /// Classify a yield probability into its match tier
    pub fn from_probability(probability: u8) -> Self {
        match probability {
            80.. => MatchStatus::BestMatch,
            70..=79 => MatchStatus::GoodMatch,
            _ => MatchStatus::ModerateMatch,
        }
    }

    /// Parse a status label as it appears in model output ("Best Match",
    /// "good match", ...). Unknown labels return `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "best match" => Some(MatchStatus::BestMatch),
            "good match" => Some(MatchStatus::GoodMatch),
            "moderate match" => Some(MatchStatus::ModerateMatch),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::BestMatch => write!(f, "Best Match"),
            MatchStatus::GoodMatch => write!(f, "Good Match"),
            MatchStatus::ModerateMatch => write!(f, "Moderate Match"),
        }
    }
}

/// One crop extracted from a recommendation response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropYield {
    /// Crop name, trimmed, non-empty
    pub name: String,
    /// Yield probability in [0, 100]
    pub probability: u8,
    pub status: MatchStatus,
}

/// Soil and weather parameters entered by the farmer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilParameters {
    /// Nitrogen, mg/kg
    pub nitrogen: Decimal,
    /// Phosphorus, mg/kg
    pub phosphorus: Decimal,
    /// Potassium, mg/kg
    pub potassium: Decimal,
    /// Temperature, degrees Celsius
    pub temperature: Decimal,
    /// Relative humidity, percent
    pub humidity: Decimal,
    /// Soil pH
    pub ph: Decimal,
    /// Rainfall, mm
    pub rainfall: Decimal,
}
