use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;
use crate::providers::{
    article_schema, parse_article_payload, ArticleGenerator, ArticleRequest, GeneratedArticle,
    SYSTEM_INSTRUCTION,
};

/// Ollama client for generating articles with a local LLM server
#[derive(Debug)]
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// Model name to generate with
    model: String,
    /// Temperature for generation
    temperature: Option<f32>,
}

/// Generate request for the Ollama API
#[derive(Debug, Serialize)]
pub struct OllamaGenerationRequest {
    /// Model name to use for generation
    model: String,
    /// Prompt to generate from
    prompt: String,
    /// System message to guide the model
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Format to return a response in
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    /// Whether to stream the response
    stream: bool,
    /// Additional model parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

/// Generation options for the Ollama API
#[derive(Debug, Serialize)]
pub struct OllamaOptions {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Generation response from the Ollama API
#[derive(Debug, Deserialize)]
pub struct OllamaGenerationResponse {
    /// Generated text
    pub response: String,
    /// Whether the generation is complete
    #[serde(default)]
    pub done: bool,
}

/// Version response from the Ollama API
#[derive(Debug, Deserialize)]
pub struct OllamaVersion {
    /// Server version string
    pub version: String,
}

impl Ollama {
    /// Create a new Ollama client from a host and port
    pub fn new(host: impl Into<String>, port: u16, model: impl Into<String>) -> Self {
        let host = host.into();

        // Accept a bare host or a full URL, defaulting the scheme to http
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            if host.rsplit(':').next().is_some_and(|p| p.parse::<u16>().is_ok()) {
                host
            } else {
                format!("{}:{}", host.trim_end_matches('/'), port)
            }
        } else {
            format!("http://{}:{}", host, port)
        };

        Self {
            base_url,
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            model: model.into(),
            temperature: None,
        }
    }

    /// Create a new Ollama client from a complete URL
    pub fn from_url(url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: url.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            model: model.into(),
            temperature: None,
        }
    }

    /// Set the temperature used for generation
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Query the Ollama server version
    pub async fn version(&self) -> Result<OllamaVersion, GenerationError> {
        let url = format!("{}/api/version", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            GenerationError::ServiceUnavailable(format!("Failed to reach Ollama server: {}", e))
        })?;

        response.json::<OllamaVersion>().await.map_err(|e| {
            GenerationError::Unknown(format!("Failed to parse Ollama version response: {}", e))
        })
    }

    /// Generate text from the Ollama API
    async fn generate_text(&self, request: &ArticleRequest) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", self.base_url);

        // Ollama has no native schema parameter, so the schema is spelled out
        // in the prompt and JSON mode enforces well-formed output
        let prompt = format!(
            "{}\n\nRespond with a single JSON object matching this schema:\n{}",
            request.prompt(),
            article_schema()
        );

        let body = OllamaGenerationRequest {
            model: self.model.clone(),
            prompt,
            system: Some(SYSTEM_INSTRUCTION.to_string()),
            format: Some("json".to_string()),
            stream: false,
            options: self.temperature.map(|t| OllamaOptions {
                temperature: Some(t),
            }),
        };

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            GenerationError::ServiceUnavailable(format!("Failed to reach Ollama server: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, error_text);

            return Err(if status.as_u16() == 429 {
                GenerationError::RateLimited(error_text)
            } else if status.is_server_error() {
                GenerationError::ServiceUnavailable(error_text)
            } else {
                GenerationError::Unknown(format!("Ollama API error ({}): {}", status, error_text))
            });
        }

        let generation = response
            .json::<OllamaGenerationResponse>()
            .await
            .map_err(|e| {
                GenerationError::Unknown(format!("Failed to parse Ollama API response: {}", e))
            })?;

        Ok(generation.response)
    }
}

#[async_trait]
impl ArticleGenerator for Ollama {
    async fn generate(&self, request: &ArticleRequest) -> Result<GeneratedArticle, GenerationError> {
        let text = self.generate_text(request).await?;
        parse_article_payload(&text)
    }

    async fn test_connection(&self) -> Result<(), GenerationError> {
        self.version().await.map(|_| ())
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}
