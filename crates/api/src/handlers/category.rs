//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use hub_core::error::CoreError;
use hub_core::types::DbId;
use hub_db::models::category::{Category, CreateCategory, UpdateCategory};
use hub_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    hub_core::category::validate_name(&input.name)?;
    hub_core::category::validate_icon(input.icon.as_deref())?;

    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, "Created category");
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    if let Some(name) = &input.name {
        hub_core::category::validate_name(name)?;
    }
    hub_core::category::validate_icon(input.icon.as_deref())?;

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    tracing::info!(category_id = id, "Updated category");
    Ok(Json(category))
}

/// DELETE /api/v1/categories/{id}
///
/// Cascades: deletes the category's resources and their content blocks.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete_cascade(&state.pool, id).await?;
    if deleted {
        tracing::info!(category_id = id, "Deleted category (cascade)");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}
