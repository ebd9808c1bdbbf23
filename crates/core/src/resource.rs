//! Validation rules for resources.

use crate::error::CoreError;

/// Maximum length for a resource title in characters (VARCHAR(255)).
pub const MAX_TITLE_LEN: usize = 255;

/// Default read time in minutes, applied when a resource is created without
/// an explicit value.
pub const DEFAULT_READ_TIME_MINUTES: i32 = 5;

/// Validate a resource title: non-empty after trimming, within length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Resource title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Resource title too long: {} chars (max {MAX_TITLE_LEN})",
            title.len()
        )));
    }
    Ok(())
}

/// Validate an optional read time: must be positive when provided.
pub fn validate_read_time(read_time: Option<i32>) -> Result<(), CoreError> {
    if let Some(rt) = read_time {
        if rt < 1 {
            return Err(CoreError::Validation(format!(
                "Read time must be at least 1 minute, got {rt}"
            )));
        }
    }
    Ok(())
}
