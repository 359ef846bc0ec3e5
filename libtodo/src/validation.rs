//! Item validation
//!
//! One rule: new items must not be blank. Edits are not validated.

use crate::error::ValidationError;

/// Message stored in the list's error state when an append is rejected
pub const EMPTY_TASK_MESSAGE: &str = "Task cannot be empty";

/// True when `text` has nothing left after trimming surrounding whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Check text that is about to be appended as a new item
pub fn validate_new_item(text: &str) -> Result<(), ValidationError> {
    if is_blank(text) {
        return Err(ValidationError::EmptyTask);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_blank() {
        assert!(is_blank(""));
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        assert!(is_blank("   "));
        assert!(is_blank("\t\n  \r\n"));
        // Unicode whitespace counts too
        assert!(is_blank("\u{3000}\u{2003}"));
    }

    #[test]
    fn test_text_is_not_blank() {
        assert!(!is_blank("a"));
        assert!(!is_blank("  buy milk  "));
        assert!(!is_blank("买牛奶"));
    }

    #[test]
    fn test_validate_new_item() {
        assert_eq!(validate_new_item(" "), Err(ValidationError::EmptyTask));
        assert!(validate_new_item("write report").is_ok());
    }

    #[test]
    fn test_message_matches_error_display() {
        assert_eq!(ValidationError::EmptyTask.to_string(), EMPTY_TASK_MESSAGE);
    }
}
