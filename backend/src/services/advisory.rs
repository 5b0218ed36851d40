//! Advisory flows: prompt the model, then structure its answer
//!
//! Each flow is completion-then-extraction: the raw Markdown is always
//! returned for display, and the structured fields are filled in only
//! when the extractors find usable data. An extraction miss is not an
//! error here; the dashboard falls back to showing the text alone.

use serde::Serialize;
use shared::chart::{render_price_chart, render_yield_chart};
use shared::extract::{extract_price_data, extract_yield_data};
use shared::metrics::best_choice;
use shared::models::{CropYield, PriceComparison, PriceExtraction, SoilParameters};

use crate::error::AppResult;
use crate::external::llm::LlmClient;
use crate::services::prompts;

/// Advisory service backed by the completion API
#[derive(Clone)]
pub struct AdvisoryService {
    llm: LlmClient,
}

/// Crop recommendation result
#[derive(Debug, Serialize)]
pub struct CropAdvisory {
    /// Raw Markdown recommendations for display
    pub recommendations: String,
    /// Extracted yield entries, sorted by probability descending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yields: Option<Vec<CropYield>>,
    /// Top-ranked crop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_choice: Option<CropYield>,
    /// Yield comparison chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_svg: Option<String>,
}

/// Price prediction result
#[derive(Debug, Serialize)]
pub struct PriceAdvisory {
    /// Raw Markdown analysis for display
    pub predictions: String,
    pub crop: String,
    pub district: String,
    /// Extracted prices; missing fields are omitted, never zeroed
    pub prices: PriceExtraction,
    /// Derived comparison, present only when both prices were found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<PriceComparison>,
    /// Price comparison chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_svg: Option<String>,
}

/// Disease detection result
#[derive(Debug, Serialize)]
pub struct DiseaseReport {
    /// Raw Markdown assessment for display
    pub analysis: String,
}

impl AdvisoryService {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Recommend crops for the given soil and weather parameters
    pub async fn recommend_crops(&self, params: &SoilParameters) -> AppResult<CropAdvisory> {
        let prompt = prompts::crop_recommendation(params);
        let recommendations = self.llm.complete(prompt).await?;

        let yields = extract_yield_data(&recommendations);
        if yields.is_none() {
            tracing::warn!("no yield entries extracted from recommendation response");
        }
        let best = yields.as_deref().and_then(best_choice).cloned();
        let chart_svg = yields.as_deref().map(render_yield_chart);

        Ok(CropAdvisory {
            recommendations,
            yields,
            best_choice: best,
            chart_svg,
        })
    }

    /// Predict prices for a crop in a district
    pub async fn predict_prices(&self, crop: &str, district: &str) -> AppResult<PriceAdvisory> {
        let prompt = prompts::price_prediction(crop, district);
        let predictions = self.llm.complete(prompt).await?;

        let prices = extract_price_data(&predictions);
        if prices.is_empty() {
            tracing::warn!(%crop, %district, "no prices extracted from prediction response");
        }
        let comparison = PriceComparison::from_extraction(&prices);
        let chart_svg = comparison
            .as_ref()
            .map(|c| render_price_chart(c, crop, district));

        Ok(PriceAdvisory {
            predictions,
            crop: crop.to_string(),
            district: district.to_string(),
            prices,
            comparison,
            chart_svg,
        })
    }

    /// Analyze a crop image for diseases
    pub async fn detect_disease(&self, image_data_url: String) -> AppResult<DiseaseReport> {
        let analysis = self
            .llm
            .complete_with_image(prompts::DISEASE_DETECTION.to_string(), image_data_url)
            .await?;
        Ok(DiseaseReport { analysis })
    }
}
