use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;
use crate::providers::{
    article_schema, parse_article_payload, ArticleGenerator, ArticleRequest, GeneratedArticle,
    SYSTEM_INSTRUCTION,
};

/// Gemini client for interacting with the Google Gemini API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication, injected at construction time
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Model to generate with
    model: String,
    /// Temperature for generation
    temperature: Option<f32>,
}

/// Gemini generateContent request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation contents
    contents: Vec<GeminiContent>,

    /// System instruction to guide the model
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,

    /// Structured-output configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content block in a Gemini request or response
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Content parts
    pub parts: Vec<GeminiPart>,
}

/// Individual part of a content block
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// Text payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Generation configuration for structured output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// MIME type of the response payload
    response_mime_type: String,
    /// JSON Schema the response must match
    response_schema: serde_json::Value,
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    /// Feedback about the prompt itself
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// Single response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Generated content
    pub content: Option<GeminiContent>,
    /// Why generation stopped
    pub finish_reason: Option<String>,
}

/// Prompt feedback carrying safety block information
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked, if it was
    pub block_reason: Option<String>,
}

impl GeminiRequest {
    /// Create a request for one transcript with the article schema attached
    pub fn for_article(request: &ArticleRequest, temperature: Option<f32>) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Some(request.prompt()),
                }],
            }],
            system_instruction: Some(GeminiContent {
                parts: vec![GeminiPart {
                    text: Some(SYSTEM_INSTRUCTION.to_string()),
                }],
            }),
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: article_schema(),
                temperature,
            }),
        }
    }
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self::new_with_timeout(api_key, endpoint, model, 120)
    }

    /// Create a new Gemini client with a request timeout in seconds
    pub fn new_with_timeout(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            temperature: None,
        }
    }

    /// Set the temperature used for generation
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Complete a generateContent request
    pub async fn complete(&self, request: GeminiRequest) -> Result<GeminiResponse, GenerationError> {
        // Fail before any network cost when no credential is configured
        if self.api_key.trim().is_empty() {
            return Err(GenerationError::AuthenticationRequired(
                "No API key configured for the Gemini provider".to_string(),
            ));
        }

        let base = if self.endpoint.is_empty() {
            "https://generativelanguage.googleapis.com".to_string()
        } else {
            self.endpoint.trim_end_matches('/').to_string()
        };
        let api_url = format!("{}/v1beta/models/{}:generateContent", base, self.model);

        let response = self
            .client
            .post(&api_url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                GenerationError::Unknown(format!("Failed to send request to Gemini API: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(Self::classify_status(status, error_text));
        }

        response.json::<GeminiResponse>().await.map_err(|e| {
            GenerationError::Unknown(format!("Failed to parse Gemini API response: {}", e))
        })
    }

    /// Map an HTTP error status to the closed error taxonomy
    fn classify_status(status: StatusCode, error_text: String) -> GenerationError {
        match status.as_u16() {
            401 | 403 => GenerationError::AuthenticationRequired(error_text),
            // The API reports an unknown key as a missing entity
            404 if error_text.contains("Requested entity was not found") => {
                GenerationError::AuthenticationRequired(error_text)
            }
            429 => GenerationError::RateLimited(error_text),
            _ if status.is_server_error() => GenerationError::ServiceUnavailable(error_text),
            _ => GenerationError::Unknown(format!("Gemini API error ({}): {}", status, error_text)),
        }
    }

    /// Extract the text payload from a Gemini response
    pub fn extract_text_from_response(response: &GeminiResponse) -> String {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Check the response for an upstream safety rejection
    fn check_rejection(response: &GeminiResponse) -> Result<(), GenerationError> {
        if let Some(feedback) = &response.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                return Err(GenerationError::ContentRejected(format!(
                    "Prompt blocked: {}",
                    reason
                )));
            }
        }

        if let Some(candidate) = response.candidates.first() {
            if let Some(reason) = &candidate.finish_reason {
                if reason == "SAFETY" || reason == "PROHIBITED_CONTENT" {
                    return Err(GenerationError::ContentRejected(format!(
                        "Generation stopped: {}",
                        reason
                    )));
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ArticleGenerator for Gemini {
    async fn generate(&self, request: &ArticleRequest) -> Result<GeneratedArticle, GenerationError> {
        let gemini_request = GeminiRequest::for_article(request, self.temperature);
        let response = self.complete(gemini_request).await?;

        Self::check_rejection(&response)?;

        let text = Self::extract_text_from_response(&response);
        parse_article_payload(&text)
    }

    async fn test_connection(&self) -> Result<(), GenerationError> {
        let request = ArticleRequest::new("Connection test.");
        let gemini_request = GeminiRequest::for_article(&request, self.temperature);
        self.complete(gemini_request).await.map(|_| ())
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
