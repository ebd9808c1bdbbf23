//! Validation rules for categories.
//!
//! A category is a named group of resources with an optional icon. The icon
//! is an opaque symbolic name (e.g. `"CheckCircle"`); mapping it to an actual
//! glyph is the client's concern.

use crate::error::CoreError;

/// Maximum length for a category name in characters (VARCHAR(255)).
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length for an icon name in characters (VARCHAR(255)).
pub const MAX_ICON_LEN: usize = 255;

/// Validate a category name: non-empty after trimming, within length limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Category name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Category name too long: {} chars (max {MAX_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate an optional icon name: length limit only.
pub fn validate_icon(icon: Option<&str>) -> Result<(), CoreError> {
    if let Some(i) = icon {
        if i.len() > MAX_ICON_LEN {
            return Err(CoreError::Validation(format!(
                "Icon name too long: {} chars (max {MAX_ICON_LEN})",
                i.len()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::error::CoreError;

    #[test]
    fn name_accepts_normal_values() {
        assert!(validate_name("Pré-Evento").is_ok());
        assert!(validate_name("Materiais de Marketing").is_ok());
    }

    #[test]
    fn name_rejects_empty_and_whitespace() {
        assert_matches!(
            validate_name("").unwrap_err(),
            CoreError::Validation(msg) if msg.contains("empty")
        );
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn name_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_name(&long).is_err());
    }

    #[test]
    fn icon_accepts_absent_and_normal() {
        assert!(validate_icon(None).is_ok());
        assert!(validate_icon(Some("CheckCircle")).is_ok());
    }

    #[test]
    fn icon_rejects_overlong() {
        let long = "x".repeat(MAX_ICON_LEN + 1);
        assert!(validate_icon(Some(&long)).is_err());
    }
}
