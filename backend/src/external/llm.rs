//! LLM completion API client
//!
//! Talks to an OpenAI-compatible `/chat/completions` endpoint. The
//! advisory flows send plain text prompts; disease detection sends a
//! text part plus an image part (data URL).

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::error::{AppError, AppResult};

/// Client for the chat-completions endpoint
#[derive(Clone)]
pub struct LlmClient {
    config: LlmConfig,
    http_client: Client,
}

/// Chat completion request body
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

/// Message content is either a plain string or a multimodal parts array
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

/// Chat completion response body
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl LlmClient {
    /// Create a new completion client
    pub fn new(config: LlmConfig) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Run a text prompt through the completion model
    pub async fn complete(&self, prompt: String) -> AppResult<String> {
        let request = ChatRequest {
            model: self.config.completion_model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: MessageContent::Text(prompt),
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };
        self.send(request).await
    }

    /// Run a text prompt plus an image (data URL) through the vision model
    pub async fn complete_with_image(
        &self,
        prompt: String,
        image_data_url: String,
    ) -> AppResult<String> {
        let request = ChatRequest {
            model: self.config.vision_model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::Text { text: prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image_data_url,
                        },
                    },
                ]),
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };
        self.send(request).await
    }

    async fn send(&self, request: ChatRequest) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.config.base_url);

        tracing::debug!(model = %request.model, "sending completion request");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::LlmApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::LlmApi(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::LlmApi(format!("Failed to parse response: {}", e)))?;

        result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::LlmApi("Completion contained no choices".to_string()))
    }
}
