//! Theme settings models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use hub_core::types::{DbId, Timestamp};

/// A row from the `theme_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSetting {
    pub id: DbId,
    pub name: String,
    pub primary_color: String,
    pub background_color: String,
    pub surface_color: String,
    pub border_color: String,
    pub text_color: String,
    pub logo_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a theme. `is_active` defaults to `false`; creating an
/// active theme deactivates every other theme first.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThemeSetting {
    pub name: String,
    pub primary_color: String,
    pub background_color: String,
    pub surface_color: String,
    pub border_color: String,
    pub text_color: String,
    pub logo_url: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a theme.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThemeSetting {
    pub name: Option<String>,
    pub primary_color: Option<String>,
    pub background_color: Option<String>,
    pub surface_color: Option<String>,
    pub border_color: Option<String>,
    pub text_color: Option<String>,
    pub logo_url: Option<String>,
    pub is_active: Option<bool>,
}
