/*!
 * Tests for the classified error taxonomy
 */

use subpress::errors::{ArticleError, GenerationError};

#[test]
fn test_isRetryable_shouldBeTrueOnlyForRateLimited() {
    assert!(GenerationError::RateLimited("quota".to_string()).is_retryable());

    assert!(!GenerationError::AuthenticationRequired("no key".to_string()).is_retryable());
    assert!(!GenerationError::ServiceUnavailable("overloaded".to_string()).is_retryable());
    assert!(!GenerationError::ContentRejected("safety".to_string()).is_retryable());
    assert!(!GenerationError::EmptyResponse.is_retryable());
    assert!(!GenerationError::Unknown("boom".to_string()).is_retryable());
}

#[test]
fn test_display_shouldDescribeEachVariant() {
    assert!(GenerationError::RateLimited("quota".to_string())
        .to_string()
        .contains("Rate limit"));
    assert!(GenerationError::EmptyResponse.to_string().contains("empty"));

    let err = ArticleError::InsufficientContent { chars: 30, min: 50 };
    let message = err.to_string();
    assert!(message.contains("30"));
    assert!(message.contains("50"));
}

#[test]
fn test_userMessage_withAuthFailure_shouldSuggestRemediation() {
    let err = ArticleError::Generation(GenerationError::AuthenticationRequired(
        "401".to_string(),
    ));
    let message = err.user_message();

    assert!(message.contains("API key"));
    assert!(message.contains("configuration"));
}

#[test]
fn test_userMessage_withValidationErrors_shouldBePlainDescriptions() {
    assert!(ArticleError::EmptyInput.user_message().contains("empty"));

    let message = ArticleError::InsufficientContent { chars: 10, min: 50 }.user_message();
    assert!(message.contains("too short"));
}

#[test]
fn test_generationError_shouldConvertIntoArticleError() {
    let err: ArticleError = GenerationError::EmptyResponse.into();
    assert!(matches!(
        err,
        ArticleError::Generation(GenerationError::EmptyResponse)
    ));
}
