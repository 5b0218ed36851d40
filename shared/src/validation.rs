//! Validation utilities for the KrishiMitra Platform
//!
//! Bounds reflect agronomic ranges for Indian growing conditions.

use rust_decimal::Decimal;

use crate::models::SoilParameters;

/// Validate farmer-entered soil and weather parameters
pub fn validate_soil_parameters(params: &SoilParameters) -> Result<(), &'static str> {
    if params.nitrogen < Decimal::ZERO
        || params.phosphorus < Decimal::ZERO
        || params.potassium < Decimal::ZERO
    {
        return Err("Nutrient values cannot be negative");
    }
    if params.ph < Decimal::ZERO || params.ph > Decimal::from(14) {
        return Err("pH must be between 0 and 14");
    }
    if params.humidity < Decimal::ZERO || params.humidity > Decimal::from(100) {
        return Err("Humidity must be between 0 and 100%");
    }
    if params.temperature < Decimal::from(-20) || params.temperature > Decimal::from(60) {
        return Err("Temperature out of plausible range");
    }
    if params.rainfall < Decimal::ZERO {
        return Err("Rainfall cannot be negative");
    }
    Ok(())
}

/// Validate a weather location query
pub fn validate_location(location: &str) -> Result<(), &'static str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err("Location is required");
    }
    if trimmed.len() > 100 {
        return Err("Location must be at most 100 characters");
    }
    Ok(())
}

/// Validate an uploaded crop image payload (data URL)
pub fn validate_image_data(image_data: &str) -> Result<(), &'static str> {
    if image_data.is_empty() {
        return Err("Image data is required");
    }
    if !image_data.starts_with("data:image/") {
        return Err("Image must be a data URL");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn params() -> SoilParameters {
        SoilParameters {
            nitrogen: Decimal::from(90),
            phosphorus: Decimal::from(42),
            potassium: Decimal::from(43),
            temperature: Decimal::from_str("24.5").unwrap(),
            humidity: Decimal::from(82),
            ph: Decimal::from_str("6.5").unwrap(),
            rainfall: Decimal::from(203),
        }
    }

    #[test]
    fn typical_parameters_pass() {
        assert!(validate_soil_parameters(&params()).is_ok());
    }

    #[test]
    fn ph_bounds_are_enforced() {
        let mut p = params();
        p.ph = Decimal::from(15);
        assert!(validate_soil_parameters(&p).is_err());
        p.ph = Decimal::from(14);
        assert!(validate_soil_parameters(&p).is_ok());
    }

    #[test]
    fn humidity_bounds_are_enforced() {
        let mut p = params();
        p.humidity = Decimal::from(101);
        assert!(validate_soil_parameters(&p).is_err());
    }

    #[test]
    fn negative_nutrients_are_rejected() {
        let mut p = params();
        p.nitrogen = Decimal::from(-1);
        assert!(validate_soil_parameters(&p).is_err());
    }

    #[test]
    fn location_must_be_non_empty() {
        assert!(validate_location("Pune").is_ok());
        assert!(validate_location("   ").is_err());
        assert!(validate_location(&"x".repeat(101)).is_err());
    }

    #[test]
    fn image_data_must_be_a_data_url() {
        assert!(validate_image_data("data:image/jpeg;base64,/9j/4AAQ").is_ok());
        assert!(validate_image_data("https://example.com/leaf.jpg").is_err());
        assert!(validate_image_data("").is_err());
    }
}
