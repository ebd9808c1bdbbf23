//! Handlers for the `/resources` resource.
//!
//! Reassigning a resource to another category is a plain partial update
//! carrying `categoryId` (PUT or PATCH); a dangling target is rejected by
//! the foreign key and surfaces as a 400.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use hub_core::error::CoreError;
use hub_core::types::DbId;
use hub_db::models::resource::{CreateResource, Resource, UpdateResource};
use hub_db::repositories::ResourceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Query parameters for `GET /resources`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourcesQuery {
    /// When present, only resources in this category are returned.
    pub category_id: Option<DbId>,
}

/// GET /api/v1/resources[?categoryId=N]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListResourcesQuery>,
) -> AppResult<Json<Vec<Resource>>> {
    let resources = match query.category_id {
        Some(category_id) => ResourceRepo::list_by_category(&state.pool, category_id).await?,
        None => ResourceRepo::list(&state.pool).await?,
    };
    Ok(Json(resources))
}

/// GET /api/v1/resources/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Resource>> {
    let resource = ResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    Ok(Json(resource))
}

/// POST /api/v1/resources
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateResource>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    hub_core::resource::validate_title(&input.title)?;
    hub_core::resource::validate_read_time(input.read_time)?;

    let resource = ResourceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        resource_id = resource.id,
        category_id = resource.category_id,
        "Created resource"
    );
    Ok((StatusCode::CREATED, Json(resource)))
}

/// PUT /api/v1/resources/{id} and PATCH /api/v1/resources/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateResource>,
) -> AppResult<Json<Resource>> {
    if let Some(title) = &input.title {
        hub_core::resource::validate_title(title)?;
    }
    hub_core::resource::validate_read_time(input.read_time)?;

    let resource = ResourceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    tracing::info!(resource_id = id, "Updated resource");
    Ok(Json(resource))
}

/// DELETE /api/v1/resources/{id}
///
/// Cascades: deletes the resource's content blocks.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ResourceRepo::delete_cascade(&state.pool, id).await?;
    if deleted {
        tracing::info!(resource_id = id, "Deleted resource (cascade)");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))
    }
}
