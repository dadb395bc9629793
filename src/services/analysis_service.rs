use crate::config::Config;
use crate::errors::{ActionalyzeError, Result};
use crate::models::action::{ActionType, CorporateAction};
use crate::models::company::Company;
use crate::util::{format_market_cap_billions, format_yield_percent};
use log::{error, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const TEXT_MODEL: &str = "gemini-2.5-flash";
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

pub const MISSING_KEY_MESSAGE: &str = "AI Analysis Unavailable: API Key missing.";
pub const EMPTY_ANALYSIS_MESSAGE: &str = "Analysis could not be generated.";
pub const FAILED_ANALYSIS_MESSAGE: &str =
    "An error occurred while generating the analysis. Please try again later.";

const GENERIC_INSTRUCTIONS: &str = "\
1. The immediate expected impact on stock price.
2. What this signals about the company's health.
3. Sentiment (Bullish/Bearish/Neutral).";

const DIVIDEND_INSTRUCTIONS: &str = "\
1. The immediate impact on stock price (considering ex-dividend adjustments).
2. Impact on investor sentiment, specifically regarding income stability and yield attractiveness.
3. Assessment of future payout expectations and sustainability.
4. Overall Sentiment (Bullish/Bearish/Neutral).";

/// generateContent request/response structures
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// First inline image of the first candidate as a data URI
    fn image_data_uri(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .map(|img| format!("data:image/png;base64,{}", img.data))
    }
}

/// Gemini-backed narrative analysis and imagery.
///
/// Every public operation degrades to a placeholder instead of failing.
pub struct AnalysisService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AnalysisService {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ActionalyzeError::RequestError)?;

        Ok(Self {
            client,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            api_key: config.gemini_api_key.clone(),
        })
    }

    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Short Markdown analysis of how `action` may affect `company`
    pub async fn analyze_action_impact(&self, company: &Company, action: &CorporateAction) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return MISSING_KEY_MESSAGE.to_string();
        };

        info!("Requesting impact analysis for {} ({})", action.id, action.action_type);
        let prompt = build_impact_prompt(company, action);

        match self.generate_content(api_key, TEXT_MODEL, &prompt).await {
            Ok(response) => response.text().unwrap_or_else(|| EMPTY_ANALYSIS_MESSAGE.to_string()),
            Err(e) => {
                error!("Gemini analysis error: {}", e);
                FAILED_ANALYSIS_MESSAGE.to_string()
            }
        }
    }

    /// Infographic for `company` as a `data:image/png;base64,...` URI
    pub async fn generate_stock_image(&self, company: &Company) -> Option<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("API key missing for image generation");
            return None;
        };

        info!("Requesting image for {}", company.ticker);
        let prompt = build_image_prompt(company);

        match self.generate_content(api_key, IMAGE_MODEL, &prompt).await {
            Ok(response) => response.image_data_uri(),
            Err(e) => {
                error!("Gemini image generation error: {}", e);
                None
            }
        }
    }

    async fn generate_content(&self, api_key: &str, model: &str, prompt: &str) -> Result<GenerateContentResponse> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    inline_data: None,
                }],
            }],
        };

        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, model))
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ActionalyzeError::AiServiceError(format!("HTTP {}: {}", status, body)));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| ActionalyzeError::AiServiceError(e.to_string()))
    }
}

pub fn build_impact_prompt(company: &Company, action: &CorporateAction) -> String {
    let instructions = if action.action_type == ActionType::Dividend {
        DIVIDEND_INSTRUCTIONS
    } else {
        GENERIC_INSTRUCTIONS
    };

    format!(
        "You are a senior financial analyst.
Analyze the following corporate action for {name} ({ticker}).

Action Type: {action_type}
Description: {description}
Date: {date}
Value: {value}

Current Market Context:
Price: ${price}
Market Cap: ${market_cap}
Dividend Yield: {dividend_yield}

Please provide a concise, plain-language analysis (max 150 words) covering:
{instructions}

Format the response in simple Markdown (use bolding for key terms and numbered lists for points).",
        name = company.name,
        ticker = company.ticker,
        action_type = action.action_type,
        description = action.description,
        date = action.date.format("%Y-%m-%d"),
        value = action.value.as_deref().unwrap_or("N/A"),
        price = company.price,
        market_cap = format_market_cap_billions(company.market_cap),
        dividend_yield = format_yield_percent(company.dividend_yield),
        instructions = instructions,
    )
}

pub fn build_image_prompt(company: &Company) -> String {
    format!(
        "Create a professional, futuristic, and clean financial infographic for {} ({}).
The image should feature a stylized bullish chart background in teal and blue tones.
It should visually represent the concept of \"Growth\" and \"Stability\".
Do not include text overlays.
Style: 3D, Minimalist, Fintech, High Quality.",
        company.name, company.ticker
    )
}
