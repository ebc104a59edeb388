/*!
 * Error types for the subpress application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors reported by a generation provider.
///
/// This is a closed taxonomy: every transport or service failure is classified
/// into exactly one of these variants at the provider boundary. Callers match
/// on variants, never on message content.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// API credential is missing or was rejected by the service
    #[error("Authentication required: {0}")]
    AuthenticationRequired(String),

    /// Request quota exceeded, the request may succeed after a delay
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Upstream service is overloaded or temporarily down
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The service refused to generate content for this input
    #[error("Content rejected by the service: {0}")]
    ContentRejected(String),

    /// The service answered but returned no usable payload
    #[error("Service returned an empty response")]
    EmptyResponse,

    /// Anything that does not fit the categories above
    #[error("Generation failed: {0}")]
    Unknown(String),
}

impl GenerationError {
    /// Whether the orchestrator may retry this error automatically.
    ///
    /// Only rate limiting is expected to resolve on a short delay; overload and
    /// content-policy failures are surfaced immediately for manual resubmission.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationError::RateLimited(_))
    }
}

/// Errors that can occur while creating an article from a subtitle file
#[derive(Error, Debug)]
pub enum ArticleError {
    /// The supplied file is not a subtitle file
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The supplied file content is empty
    #[error("Subtitle file is empty")]
    EmptyInput,

    /// The normalized transcript is too short to generate an article from
    #[error("Transcript too short to generate an article ({chars} chars, need at least {min})")]
    InsufficientContent {
        /// Character count of the normalized transcript
        chars: usize,
        /// Minimum viable character count
        min: usize,
    },

    /// Classified error from the generation provider
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl ArticleError {
    /// Short user-facing message category for CLI reporting.
    ///
    /// Credential problems get a remediation hint; everything else maps to a
    /// plain description of what went wrong.
    pub fn user_message(&self) -> String {
        match self {
            ArticleError::InvalidInput(msg) => msg.clone(),
            ArticleError::EmptyInput => "The subtitle file is empty.".to_string(),
            ArticleError::InsufficientContent { chars, min } => format!(
                "The subtitle content is too short to generate an article ({} of {} required characters).",
                chars, min
            ),
            ArticleError::Generation(GenerationError::AuthenticationRequired(_)) => {
                "API key is missing or invalid. Set a valid key in the provider configuration."
                    .to_string()
            }
            ArticleError::Generation(GenerationError::RateLimited(_)) => {
                "API rate limit reached. Please wait before retrying.".to_string()
            }
            ArticleError::Generation(GenerationError::ServiceUnavailable(_)) => {
                "The generation service is overloaded. Try again later.".to_string()
            }
            ArticleError::Generation(GenerationError::ContentRejected(_)) => {
                "The generation service rejected this content.".to_string()
            }
            ArticleError::Generation(GenerationError::EmptyResponse) => {
                "The generation service returned an empty response.".to_string()
            }
            ArticleError::Generation(GenerationError::Unknown(msg)) => {
                format!("Generation failed: {}", msg)
            }
        }
    }
}
