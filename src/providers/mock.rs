/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock generators that simulate different behaviors:
 * - `MockGenerator::working()` - Always succeeds with a generated article
 * - `MockGenerator::rate_limited_times(n)` - Fails the first n requests with a rate limit
 * - `MockGenerator::failing(...)` - Always fails with the given classification
 * - `MockGenerator::empty()` - Always reports an empty service payload
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::GenerationError;
use crate::providers::{ArticleGenerator, ArticleRequest, GeneratedArticle};

/// Behavior mode for the mock generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a generated article
    Working,
    /// Fails the first `count` requests with RateLimited, then succeeds
    RateLimitedTimes {
        /// Number of leading requests that fail
        count: usize,
    },
    /// Always fails with AuthenticationRequired
    AuthRequired,
    /// Always fails with ServiceUnavailable
    Unavailable,
    /// Always fails with ContentRejected
    Rejected,
    /// Always fails with EmptyResponse
    Empty,
}

/// Mock generator for testing orchestration behavior
#[derive(Debug)]
pub struct MockGenerator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter shared across clones
    request_count: Arc<AtomicUsize>,
}

impl MockGenerator {
    /// Create a new mock generator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock generator that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that rate-limits the first `count` requests
    pub fn rate_limited_times(count: usize) -> Self {
        Self::new(MockBehavior::RateLimitedTimes { count })
    }

    /// Create a mock that always reports a missing credential
    pub fn auth_required() -> Self {
        Self::new(MockBehavior::AuthRequired)
    }

    /// Create a mock that always reports an overloaded service
    pub fn unavailable() -> Self {
        Self::new(MockBehavior::Unavailable)
    }

    /// Create a mock that always reports a content rejection
    pub fn rejected() -> Self {
        Self::new(MockBehavior::Rejected)
    }

    /// Create a mock that always reports an empty payload
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Number of generate calls this mock has received
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Article returned by succeeding behaviors
    fn article_for(request: &ArticleRequest) -> GeneratedArticle {
        GeneratedArticle {
            title: "Generated Title".to_string(),
            summary: "A generated summary of the transcript.".to_string(),
            content: format!("<h2>Section</h2><p>{}</p>", request.transcript),
        }
    }
}

impl Clone for MockGenerator {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl ArticleGenerator for MockGenerator {
    async fn generate(&self, request: &ArticleRequest) -> Result<GeneratedArticle, GenerationError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(Self::article_for(request)),

            MockBehavior::RateLimitedTimes { count: fail_count } => {
                if count < fail_count {
                    Err(GenerationError::RateLimited(format!(
                        "Simulated rate limit (request #{})",
                        count + 1
                    )))
                } else {
                    Ok(Self::article_for(request))
                }
            }

            MockBehavior::AuthRequired => Err(GenerationError::AuthenticationRequired(
                "Simulated missing credential".to_string(),
            )),

            MockBehavior::Unavailable => Err(GenerationError::ServiceUnavailable(
                "Simulated overloaded service".to_string(),
            )),

            MockBehavior::Rejected => Err(GenerationError::ContentRejected(
                "Simulated safety rejection".to_string(),
            )),

            MockBehavior::Empty => Err(GenerationError::EmptyResponse),
        }
    }

    async fn test_connection(&self) -> Result<(), GenerationError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
