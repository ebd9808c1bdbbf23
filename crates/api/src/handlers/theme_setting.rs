//! Handlers for the `/theme-settings` resource.
//!
//! At most one theme is active at a time; the repository enforces
//! deactivate-all-then-activate transactionally. Deleting the active theme
//! is refused with 409 -- a replacement must be activated first.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use hub_core::error::CoreError;
use hub_core::theme;
use hub_core::types::DbId;
use hub_db::models::theme_setting::{CreateThemeSetting, ThemeSetting, UpdateThemeSetting};
use hub_db::repositories::{ThemeDeleteOutcome, ThemeSettingRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// GET /api/v1/theme-settings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ThemeSetting>>> {
    let themes = ThemeSettingRepo::list(&state.pool).await?;
    Ok(Json(themes))
}

/// GET /api/v1/theme-settings/active
pub async fn get_active(State(state): State<AppState>) -> AppResult<Json<ThemeSetting>> {
    let theme = ThemeSettingRepo::find_active(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("No active theme is set".to_string()))?;
    Ok(Json(theme))
}

/// GET /api/v1/theme-settings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ThemeSetting>> {
    let theme = ThemeSettingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ThemeSetting",
            id,
        }))?;
    Ok(Json(theme))
}

/// POST /api/v1/theme-settings
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateThemeSetting>,
) -> AppResult<(StatusCode, Json<ThemeSetting>)> {
    theme::validate_name(&input.name)?;
    theme::validate_hex_color("primaryColor", &input.primary_color)?;
    theme::validate_hex_color("backgroundColor", &input.background_color)?;
    theme::validate_hex_color("surfaceColor", &input.surface_color)?;
    theme::validate_hex_color("borderColor", &input.border_color)?;
    theme::validate_hex_color("textColor", &input.text_color)?;

    let created = ThemeSettingRepo::create(&state.pool, &input).await?;
    tracing::info!(
        theme_id = created.id,
        is_active = created.is_active,
        "Created theme"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/v1/theme-settings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateThemeSetting>,
) -> AppResult<Json<ThemeSetting>> {
    if let Some(name) = &input.name {
        theme::validate_name(name)?;
    }
    for (field, value) in [
        ("primaryColor", &input.primary_color),
        ("backgroundColor", &input.background_color),
        ("surfaceColor", &input.surface_color),
        ("borderColor", &input.border_color),
        ("textColor", &input.text_color),
    ] {
        if let Some(color) = value {
            theme::validate_hex_color(field, color)?;
        }
    }

    let updated = ThemeSettingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ThemeSetting",
            id,
        }))?;
    tracing::info!(theme_id = id, is_active = updated.is_active, "Updated theme");
    Ok(Json(updated))
}

/// POST /api/v1/theme-settings/{id}/activate
pub async fn activate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ThemeSetting>> {
    let theme = ThemeSettingRepo::set_active(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ThemeSetting",
            id,
        }))?;
    tracing::info!(theme_id = id, "Activated theme");
    Ok(Json(theme))
}

/// DELETE /api/v1/theme-settings/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    match ThemeSettingRepo::delete(&state.pool, id).await? {
        ThemeDeleteOutcome::Deleted => {
            tracing::info!(theme_id = id, "Deleted theme");
            Ok(StatusCode::NO_CONTENT)
        }
        ThemeDeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "ThemeSetting",
            id,
        })),
        ThemeDeleteOutcome::ActiveTheme => Err(AppError::Core(CoreError::Conflict(
            "Cannot delete the active theme; activate another theme first".to_string(),
        ))),
    }
}
