//! Prompt templates for the advisory flows
//!
//! The prompt text is an upstream contract: the extractors in the
//! shared crate parse the output format these prompts request. Changing
//! the wording here without revisiting the extraction patterns will
//! quietly degrade the dashboard's structured views.

use shared::models::SoilParameters;

/// Prompt for the crop recommendation flow
pub fn crop_recommendation(params: &SoilParameters) -> String {
    format!(
        r#"You are KrishiMitra 2.0, an expert agricultural scientist.
Based on the following soil and weather conditions, recommend the top 3 crops for Indian farmers.
**Important:** Suggest only crops that are **commonly grown in India**.

### Soil Parameters:
- Nitrogen (N): {nitrogen} mg/kg
- Phosphorus (P): {phosphorus} mg/kg
- Potassium (K): {potassium} mg/kg
- pH: {ph}

### Weather Conditions:
- Temperature: {temperature}°C
- Humidity: {humidity}%
- Rainfall: {rainfall} mm

Response Instructions:
1. Answer strictly in **Markdown format**.
2. Start with the **main headline**:
   **🌱 KrishiMitra 2.0: Top 3 Crop Recommendations**
3. For each crop:
   - Use a **heading style** with emoji, e.g.:
     **🌾 Crop 1: Rice**
   - Add a **medium size bold "Reason" line**, e.g.:
     **💡 Reason**
   - List 3 ✅ bullet points for reasons. **Do not bold or italicize the bullets**.
   - End the block with a yield line:
     Yield Probability: 85%
4. After the three crops, add a section:
   ### 📊 Yield Analysis
   with one bullet per crop in the form:
   - <crop name>: <probability>% (Best Match | Good Match | Moderate Match)
5. Leave **one empty line** between each crop for visual separation.
6. Only recommend **regular Indian crops** that are widely cultivated.
7. Keep the language **simple, actionable, and farmer-friendly**."#,
        nitrogen = params.nitrogen,
        phosphorus = params.phosphorus,
        potassium = params.potassium,
        ph = params.ph,
        temperature = params.temperature,
        humidity = params.humidity,
        rainfall = params.rainfall,
    )
}

/// Prompt for the price prediction flow
pub fn price_prediction(crop: &str, district: &str) -> String {
    format!(
        r#"You are an expert agricultural economist specializing in Indian crop markets. Based on the following information, provide a detailed price prediction analysis:

Crop: {crop}
District: {district}

Please provide a comprehensive analysis including:

1. Current market price trends for {crop} in {district}
2. 3-month price forecast with percentage change
3. 6-month price forecast with percentage change
4. Key factors influencing price movements (weather, demand, supply, government policies, etc.)
5. Market confidence level (High/Medium/Low) with percentage
6. Risk factors that could affect prices
7. Recommendations for farmers (when to sell, storage advice, etc.)
8. Historical price patterns and seasonal trends

Begin the analysis with two bold lines in exactly this form:
**💰 Current Price**: ₹<amount> per Quintal
**📊 Predicted Price**: ₹<amount> per Quintal

Format your response in clear, structured text that farmers can easily understand. Focus on practical insights and actionable advice. Include specific price ranges and percentages where possible.

Keep the response comprehensive but easy to read, suitable for immediate farming decisions."#,
    )
}

/// Prompt for the disease detection flow (sent with the crop image)
pub const DISEASE_DETECTION: &str = r#"You are an expert agricultural scientist specializing in crop disease detection. Analyze this crop image and provide a detailed assessment in plain text format.

Please provide:
1. Any visible diseases or health issues detected
2. Severity level (High/Medium/Low/None)
3. Specific disease names if identifiable
4. Treatment recommendations
5. Prevention measures
6. Overall crop health assessment

Format your response in clear, simple text that a farmer can easily understand. Focus on practical advice and actionable recommendations. If no diseases are detected, mention that the crop appears healthy and provide general care tips.

Keep the response concise but comprehensive, suitable for immediate farming decisions."#;
