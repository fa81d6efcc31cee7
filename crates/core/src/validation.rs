//! Input validation utilities.
//!
//! Questions arrive from the REST API and the CLI. They are checked here before any
//! resolution or translation work is done.

use crate::{ChatError, ChatResult, NonEmptyText};

/// Validates a user question.
///
/// - Rejects empty or whitespace-only questions with `ChatError::EmptyQuestion`
/// - Bounds the length (in characters, after trimming) to `max_len`
///
/// # Returns
///
/// The trimmed question.
pub fn validate_question(question: &str, max_len: usize) -> ChatResult<NonEmptyText> {
    let question = NonEmptyText::new(question).map_err(|_| ChatError::EmptyQuestion)?;

    if question.as_str().chars().count() > max_len {
        return Err(ChatError::QuestionTooLong { max: max_len });
    }

    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_question_accepts_and_trims() {
        let q = validate_question("  dengue symptoms \n", 100).expect("should accept");
        assert_eq!(q.as_str(), "dengue symptoms");
    }

    #[test]
    fn test_validate_question_rejects_blank() {
        assert!(matches!(
            validate_question("", 100),
            Err(ChatError::EmptyQuestion)
        ));
        assert!(matches!(
            validate_question("   \t", 100),
            Err(ChatError::EmptyQuestion)
        ));
    }

    #[test]
    fn test_validate_question_counts_characters_not_bytes() {
        // 5 characters, 15 bytes.
        assert!(validate_question("डेंगू", 5).is_ok());
        let err = validate_question("dengue", 5).expect_err("should reject 6 chars");
        assert!(matches!(err, ChatError::QuestionTooLong { max: 5 }));
    }
}
