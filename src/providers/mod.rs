/*!
 * Provider implementations for article generation services.
 *
 * This module contains client implementations for the supported generative
 * backends:
 * - Gemini: Google Gemini API integration
 * - Ollama: Local LLM server
 * - Mock: Scripted provider behaviors for testing
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Debug;

use crate::errors::GenerationError;

/// System instruction shared by all providers.
///
/// The contract with the service: convert a raw transcript into a polished
/// article, output only prose, section titles as <h2> and paragraphs as <p>.
pub const SYSTEM_INSTRUCTION: &str = "You are a professional blog editor. \
Convert the raw transcript from an SRT file into a polished, structured blog article.\n\
CRITICAL:\n\
1. Output ONLY the article in prose.\n\
2. Do not truncate the content.\n\
3. Use <h2> for section titles and <p> for paragraphs.\n\
4. Fix grammar and remove filler words.";

/// Structured-output schema requested from the service: three required string
/// fields, with the content field carrying section/paragraph markup.
pub fn article_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "A catchy, engaging title for the article based on the content."
            },
            "summary": {
                "type": "string",
                "description": "A comprehensive executive summary of the entire transcript (3-5 sentences)."
            },
            "content": {
                "type": "string",
                "description": "The complete article content using HTML tags. Use <h2> for subheadings and <p> for paragraphs."
            }
        },
        "required": ["title", "summary", "content"]
    })
}

/// Request for article generation
#[derive(Debug, Clone)]
pub struct ArticleRequest {
    /// Normalized transcript text to generate the article from
    pub transcript: String,
}

impl ArticleRequest {
    /// Create a new article request from a normalized transcript
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }

    /// User prompt sent to the service alongside the system instruction
    pub fn prompt(&self) -> String {
        format!("Process this transcript into a blog post:\n{}", self.transcript)
    }
}

/// Structured article payload returned by a generation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedArticle {
    /// Short article title
    pub title: String,
    /// 3-5 sentence abstract
    pub summary: String,
    /// Prose with <h2> section and <p> paragraph markers
    pub content: String,
}

/// Parse the JSON payload a provider returned into a GeneratedArticle.
///
/// A payload that is missing, unparsable as the schema, or has any empty
/// field is not usable; the classification is EmptyResponse for empty text
/// or empty fields, Unknown for malformed JSON.
pub(crate) fn parse_article_payload(text: &str) -> Result<GeneratedArticle, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let article: GeneratedArticle = serde_json::from_str(text)
        .map_err(|e| GenerationError::Unknown(format!("Failed to parse article payload: {}", e)))?;

    if article.title.trim().is_empty()
        || article.summary.trim().is_empty()
        || article.content.trim().is_empty()
    {
        return Err(GenerationError::EmptyResponse);
    }

    Ok(article)
}

/// Common trait for all article generation providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be used interchangeably by the article service.
#[async_trait]
pub trait ArticleGenerator: Send + Sync + Debug {
    /// Generate a structured article from the request transcript
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<GeneratedArticle, GenerationError>` - The generated article or a classified error
    async fn generate(&self, request: &ArticleRequest) -> Result<GeneratedArticle, GenerationError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), GenerationError>` - Ok if the connection is usable, or a classified error
    async fn test_connection(&self) -> Result<(), GenerationError>;

    /// Short provider name for logging
    fn name(&self) -> &'static str;
}

pub mod gemini;
pub mod mock;
pub mod ollama;
