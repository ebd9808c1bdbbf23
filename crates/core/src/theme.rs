//! Validation rules for theme settings.
//!
//! A theme is a named color palette (five hex colors plus an optional logo
//! URL). At most one theme is active at a time; the singleton invariant
//! itself is enforced by the persistence layer, this module only validates
//! field shapes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Maximum length for a theme name in characters (VARCHAR(255)).
pub const MAX_NAME_LEN: usize = 255;

/// Compiled regex for hex color values (`#RRGGBB` or `#RGB`).
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid regex"));

/// Validate a theme name: non-empty after trimming, within length limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Theme name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Theme name too long: {} chars (max {MAX_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate a single hex color value. `field` names the offending field in
/// the error message (`primaryColor`, `backgroundColor`, ...).
pub fn validate_hex_color(field: &str, value: &str) -> Result<(), CoreError> {
    if HEX_COLOR_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be a hex color like #RRGGBB or #RGB, got '{value}'"
        )))
    }
}
