//! Handlers for content blocks.
//!
//! Block payloads are validated against the schema selected by `blockType`
//! before anything touches the store. On partial updates the repository
//! merges the patch onto the stored row inside the update transaction, so
//! changing `blockType` without a matching `content` (or vice versa) is
//! caught even under concurrent writes.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use hub_core::block;
use hub_core::error::CoreError;
use hub_core::types::DbId;
use hub_db::models::content_block::{
    ContentBlock, CreateContentBlock, ReorderBlocks, UpdateContentBlock,
};
use hub_db::repositories::{BlockUpdateOutcome, ContentBlockRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// GET /api/v1/resources/{id}/blocks
///
/// Returns the resource's blocks in display order. An unknown resource ID
/// yields an empty list, matching the list semantics of the other endpoints.
pub async fn list_by_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<DbId>,
) -> AppResult<Json<Vec<ContentBlock>>> {
    let blocks = ContentBlockRepo::list_by_resource(&state.pool, resource_id).await?;
    Ok(Json(blocks))
}

/// POST /api/v1/resources/{id}/blocks/reorder
///
/// Body: `{"blockIds": [..]}`. Assigns positions 0..n by list index; IDs not
/// belonging to the resource are skipped, blocks left out of the list keep
/// their old position. Returns the updated rows in their new order.
pub async fn reorder(
    State(state): State<AppState>,
    Path(resource_id): Path<DbId>,
    Json(input): Json<ReorderBlocks>,
) -> AppResult<Json<Vec<ContentBlock>>> {
    let blocks = ContentBlockRepo::reorder(&state.pool, resource_id, &input.block_ids).await?;
    tracing::info!(
        resource_id,
        reordered = blocks.len(),
        "Reordered content blocks"
    );
    Ok(Json(blocks))
}

/// GET /api/v1/blocks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContentBlock>> {
    let content_block = ContentBlockRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContentBlock",
            id,
        }))?;
    Ok(Json(content_block))
}

/// POST /api/v1/blocks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContentBlock>,
) -> AppResult<(StatusCode, Json<ContentBlock>)> {
    let block_type = block::validate_block_type(&input.block_type)?;
    block::validate_content(block_type, &input.content)?;
    block::validate_title(input.title.as_deref())?;

    let content_block = ContentBlockRepo::create(&state.pool, &input).await?;
    tracing::info!(
        block_id = content_block.id,
        resource_id = content_block.resource_id,
        block_type = %content_block.block_type,
        "Created content block"
    );
    Ok((StatusCode::CREATED, Json(content_block)))
}

/// PUT /api/v1/blocks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContentBlock>,
) -> AppResult<Json<ContentBlock>> {
    block::validate_title(input.title.as_deref())?;

    match ContentBlockRepo::update(&state.pool, id, &input).await? {
        BlockUpdateOutcome::Updated(content_block) => {
            tracing::info!(block_id = id, "Updated content block");
            Ok(Json(content_block))
        }
        BlockUpdateOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "ContentBlock",
            id,
        })),
        BlockUpdateOutcome::Invalid(err) => Err(AppError::Core(err)),
    }
}

/// DELETE /api/v1/blocks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ContentBlockRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(block_id = id, "Deleted content block");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ContentBlock",
            id,
        }))
    }
}
