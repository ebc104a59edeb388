/*!
 * Core article creation service.
 *
 * This module contains the ArticleService struct, which validates uploaded
 * subtitle content, normalizes it, invokes the configured generation provider
 * and assembles the resulting article record. All generation failures cross
 * this boundary already classified; rate limits are retried locally with
 * exponential backoff before being surfaced.
 */

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use log::{debug, warn};
use url::Url;

use crate::app_config::{GenerationConfig, GenerationProvider};
use crate::errors::{ArticleError, GenerationError};
use crate::providers::gemini::Gemini;
use crate::providers::ollama::Ollama;
use crate::providers::{ArticleGenerator, ArticleRequest, GeneratedArticle};
use crate::storage::ArticleRecord;
use crate::subtitle_processor;

/// Minimum viable character count of the normalized transcript.
///
/// Below this size the generative service cannot reliably produce a title,
/// summary and content distinct from the input.
pub const MIN_TRANSCRIPT_CHARS: usize = 50;

/// Expected subtitle file extension
pub const SUBTITLE_EXTENSION: &str = "srt";

/// Whether a file name carries the expected subtitle extension
pub fn is_subtitle_file_name(file_name: &str) -> bool {
    file_name
        .rsplit('.')
        .next()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SUBTITLE_EXTENSION))
        && file_name.len() > SUBTITLE_EXTENSION.len() + 1
}

/// Parse an endpoint string into host and port
fn parse_endpoint(endpoint: &str) -> Result<(String, u16)> {
    if endpoint.is_empty() {
        return Err(anyhow!("Endpoint cannot be empty"));
    }

    let url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Url::parse(endpoint)?
    } else {
        Url::parse(&format!("http://{}", endpoint))?
    };

    let host = url
        .host_str()
        .ok_or_else(|| anyhow!("Invalid host in endpoint: {}", endpoint))?
        .to_string();

    let port = url
        .port()
        .unwrap_or(if url.scheme() == "https" { 443 } else { 80 });

    Ok((host, port))
}

/// Main service for creating articles from subtitle files
pub struct ArticleService {
    /// Provider implementation
    generator: Arc<dyn ArticleGenerator>,

    /// Maximum number of automatic retries for rate-limited requests
    retry_count: u32,

    /// Base backoff time in milliseconds, doubled on each retry
    retry_backoff_ms: u64,
}

impl ArticleService {
    /// Create a new article service from the generation configuration
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let generator: Arc<dyn ArticleGenerator> = match config.provider {
            GenerationProvider::Gemini => Arc::new(
                Gemini::new_with_timeout(
                    config.get_api_key(),
                    config.get_endpoint(),
                    config.get_model(),
                    config.get_timeout_secs(),
                )
                .with_temperature(config.common.temperature),
            ),
            GenerationProvider::Ollama => {
                let (host, port) = parse_endpoint(&config.get_endpoint())?;
                Arc::new(
                    Ollama::new(host, port, config.get_model())
                        .with_temperature(config.common.temperature),
                )
            }
        };

        Ok(Self {
            generator,
            retry_count: config.common.retry_count,
            retry_backoff_ms: config.common.retry_backoff_ms,
        })
    }

    /// Create a service around an explicit generator (used by tests)
    pub fn with_generator(
        generator: Arc<dyn ArticleGenerator>,
        retry_count: u32,
        retry_backoff_ms: u64,
    ) -> Self {
        Self {
            generator,
            retry_count,
            retry_backoff_ms,
        }
    }

    /// Short name of the active provider
    pub fn provider_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Test the connection to the generation provider
    pub async fn test_connection(&self) -> Result<(), GenerationError> {
        self.generator.test_connection().await
    }

    /// Create an article from a named subtitle file's raw text.
    ///
    /// Validates the input, normalizes the subtitle text, invokes the
    /// generation provider and assembles a fresh article record. The record
    /// is returned to the caller; persisting it is the caller's
    /// responsibility, and no durable state is touched here.
    pub async fn create_article(
        &self,
        file_name: &str,
        raw_text: &str,
    ) -> Result<ArticleRecord, ArticleError> {
        // Fail fast on the wrong file type, before any processing cost
        if !is_subtitle_file_name(file_name) {
            return Err(ArticleError::InvalidInput(format!(
                "'{}' is not a .{} subtitle file",
                file_name, SUBTITLE_EXTENSION
            )));
        }

        if raw_text.is_empty() {
            return Err(ArticleError::EmptyInput);
        }

        let transcript = subtitle_processor::normalize(raw_text);

        let chars = transcript.chars().count();
        if chars < MIN_TRANSCRIPT_CHARS {
            return Err(ArticleError::InsufficientContent {
                chars,
                min: MIN_TRANSCRIPT_CHARS,
            });
        }

        debug!(
            "Generating article from {} ({} transcript chars) via {}",
            file_name,
            chars,
            self.generator.name()
        );

        let generated = self.generate_with_retry(&ArticleRequest::new(transcript)).await?;

        Ok(ArticleRecord::new(
            generated,
            file_name.to_string(),
            raw_text.to_string(),
        ))
    }

    /// Invoke the generator, retrying rate-limited requests with exponential
    /// backoff before surfacing a terminal error.
    async fn generate_with_retry(
        &self,
        request: &ArticleRequest,
    ) -> Result<GeneratedArticle, GenerationError> {
        let mut attempt: u32 = 0;

        loop {
            match self.generator.generate(request).await {
                Ok(article) => return Ok(article),
                Err(e) if e.is_retryable() && attempt < self.retry_count => {
                    attempt += 1;
                    let backoff_ms = self.retry_backoff_ms * (1u64 << (attempt - 1));
                    warn!(
                        "Rate limited by {}, retrying in {} ms (attempt {}/{})",
                        self.generator.name(),
                        backoff_ms,
                        attempt,
                        self.retry_count
                    );
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
