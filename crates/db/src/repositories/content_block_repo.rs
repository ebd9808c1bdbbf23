//! Repository for the `content_blocks` table.
//!
//! Blocks carry a per-resource `sort_order` meant to be a dense 0-based
//! sequence. `reorder` assigns positions from an explicit ID list; IDs that
//! do not belong to the resource match no row and are skipped, and blocks
//! omitted from the list keep their previous position. That can leave gaps
//! or duplicate positions; `list_by_resource` breaks ties by ID so the
//! display order stays stable either way.

use sqlx::PgPool;

use hub_core::block;
use hub_core::error::CoreError;
use hub_core::types::DbId;

use crate::models::content_block::{ContentBlock, CreateContentBlock, UpdateContentBlock};

/// Outcome of a guarded partial update.
#[derive(Debug)]
pub enum BlockUpdateOutcome {
    Updated(ContentBlock),
    NotFound,
    /// The patched `block_type`/`content` pair does not validate against
    /// the stored row.
    Invalid(CoreError),
}

/// Column list for `content_blocks` queries.
const COLUMNS: &str = "\
    id, resource_id, block_type, title, description, content, \
    sort_order, created_at, updated_at";

/// Provides data access for content blocks.
pub struct ContentBlockRepo;

impl ContentBlockRepo {
    /// Create a new content block at the caller-supplied position.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateContentBlock,
    ) -> Result<ContentBlock, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_blocks \
                 (resource_id, block_type, title, description, content, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentBlock>(&query)
            .bind(dto.resource_id)
            .bind(&dto.block_type)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.content)
            .bind(dto.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a content block by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ContentBlock>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_blocks WHERE id = $1");
        sqlx::query_as::<_, ContentBlock>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all blocks of a resource in display order.
    pub async fn list_by_resource(
        pool: &PgPool,
        resource_id: DbId,
    ) -> Result<Vec<ContentBlock>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_blocks \
             WHERE resource_id = $1 \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, ContentBlock>(&query)
            .bind(resource_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update a content block.
    ///
    /// Runs in a transaction: the row is locked, the effective
    /// `block_type`/`content` pair (patch merged onto the stored row) is
    /// validated, and only then is the `COALESCE` update applied. A patch
    /// that touches neither field skips the check.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateContentBlock,
    ) -> Result<BlockUpdateOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<(String, serde_json::Value)> = sqlx::query_as(
            "SELECT block_type, content FROM content_blocks WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some((stored_type, stored_content)) = existing else {
            return Ok(BlockUpdateOutcome::NotFound);
        };

        if dto.block_type.is_some() || dto.content.is_some() {
            let effective_type = dto.block_type.as_deref().unwrap_or(&stored_type);
            let effective_content = dto.content.as_ref().unwrap_or(&stored_content);
            let checked = block::validate_block_type(effective_type)
                .and_then(|block_type| block::validate_content(block_type, effective_content));
            if let Err(err) = checked {
                return Ok(BlockUpdateOutcome::Invalid(err));
            }
        }

        let query = format!(
            "UPDATE content_blocks SET \
                 block_type = COALESCE($2, block_type), \
                 title = COALESCE($3, title), \
                 description = COALESCE($4, description), \
                 content = COALESCE($5, content), \
                 sort_order = COALESCE($6, sort_order), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, ContentBlock>(&query)
            .bind(id)
            .bind(&dto.block_type)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.content)
            .bind(dto.sort_order)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(BlockUpdateOutcome::Updated(updated))
    }

    /// Delete a content block. Returns whether it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM content_blocks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Assign positions to the given blocks of a resource.
    ///
    /// Runs in a transaction: block `block_ids[i]` gets `sort_order = i`,
    /// guarded by `resource_id` so IDs belonging to other resources are
    /// silently skipped. Blocks not named in the list are left untouched
    /// (see the module docs for the gap/duplicate caveat). Returns the rows
    /// actually updated, sorted by their new position.
    pub async fn reorder(
        pool: &PgPool,
        resource_id: DbId,
        block_ids: &[DbId],
    ) -> Result<Vec<ContentBlock>, sqlx::Error> {
        let query = format!(
            "UPDATE content_blocks \
             SET sort_order = $3, updated_at = NOW() \
             WHERE id = $1 AND resource_id = $2 \
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut updated = Vec::with_capacity(block_ids.len());

        for (position, block_id) in block_ids.iter().enumerate() {
            let row = sqlx::query_as::<_, ContentBlock>(&query)
                .bind(block_id)
                .bind(resource_id)
                .bind(position as i32)
                .fetch_optional(&mut *tx)
                .await?;
            if let Some(block) = row {
                updated.push(block);
            }
        }

        tx.commit().await?;

        updated.sort_by_key(|b| (b.sort_order, b.id));
        Ok(updated)
    }
}
