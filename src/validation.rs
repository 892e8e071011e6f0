//! Input precondition checks.
//!
//! These run before any network activity. `check_text` is what the analyzer
//! uses; `validate_text` and `validate_api_key` return the form-friendly
//! [`ValidationOutcome`] shape.

use crate::error::SentimentError;
use crate::types::ValidationOutcome;

pub use crate::defaults::limits::MAX_TEXT_LENGTH;

/// Reject empty/whitespace-only text and text longer than [`MAX_TEXT_LENGTH`].
///
/// Length is measured in Unicode scalar values.
pub fn check_text(text: &str) -> Result<(), SentimentError> {
    if text.trim().is_empty() {
        return Err(SentimentError::EmptyText);
    }

    let length = text.chars().count();
    if length > MAX_TEXT_LENGTH {
        return Err(SentimentError::TextTooLong {
            length,
            max: MAX_TEXT_LENGTH,
        });
    }

    Ok(())
}

/// Validates the text input for sentiment analysis.
pub fn validate_text(text: &str) -> ValidationOutcome {
    check_text(text).into()
}

/// Validates an API key supplied through a form or configuration.
pub fn validate_api_key(api_key: &str) -> ValidationOutcome {
    if api_key.trim().is_empty() {
        return ValidationOutcome::invalid("API key cannot be empty");
    }
    ValidationOutcome::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_text_rejected() {
        assert_eq!(check_text(""), Err(SentimentError::EmptyText));
        assert_eq!(check_text("   \n\t"), Err(SentimentError::EmptyText));
        assert_eq!(
            validate_text(""),
            ValidationOutcome::invalid("Text cannot be empty")
        );
    }

    #[test]
    fn too_long_text_reports_lengths() {
        let text = "a".repeat(501);
        let outcome = validate_text(&text);
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.error_message.as_deref(),
            Some("Text is too long (501/500 characters)")
        );
    }

    #[test]
    fn boundary_length_accepted() {
        assert!(validate_text(&"a".repeat(500)).is_valid);
        assert!(validate_text("This is a valid text").is_valid);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 500 multi-byte characters are still within the limit.
        assert!(check_text(&"é".repeat(500)).is_ok());
        assert_eq!(
            check_text(&"é".repeat(501)),
            Err(SentimentError::TextTooLong {
                length: 501,
                max: 500
            })
        );
    }

    #[test]
    fn api_key_validation() {
        assert_eq!(validate_api_key("hf_valid"), ValidationOutcome::valid());
        assert_eq!(
            validate_api_key("  "),
            ValidationOutcome::invalid("API key cannot be empty")
        );
    }
}
