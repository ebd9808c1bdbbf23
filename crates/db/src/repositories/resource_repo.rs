//! Repository for the `resources` table.
//!
//! Category reassignment is a plain partial update carrying `category_id`;
//! the foreign key constraint rejects a dangling target. Deleting a resource
//! cascades to its content blocks in one transaction.

use sqlx::PgPool;

use hub_core::types::DbId;

use crate::models::resource::{CreateResource, Resource, UpdateResource};

/// Column list for `resources` queries.
const COLUMNS: &str = "id, title, description, category_id, read_time, created_at, updated_at";

/// Provides data access for resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Create a new resource. `read_time` defaults to 5 minutes when omitted.
    pub async fn create(pool: &PgPool, dto: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (title, description, category_id, read_time) \
             VALUES ($1, $2, $3, COALESCE($4, 5)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.category_id)
            .bind(dto.read_time)
            .fetch_one(pool)
            .await
    }

    /// List all resources in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources ORDER BY id");
        sqlx::query_as::<_, Resource>(&query).fetch_all(pool).await
    }

    /// List all resources belonging to a category, in insertion order.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE category_id = $1 ORDER BY id");
        sqlx::query_as::<_, Resource>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Find a resource by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a resource.
    ///
    /// Uses `COALESCE` so only provided fields are changed; passing
    /// `category_id` moves the resource to another category and touches
    /// nothing else. Returns the updated row, or `None` if not found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateResource,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 category_id = COALESCE($4, category_id), \
                 read_time = COALESCE($5, read_time), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.category_id)
            .bind(dto.read_time)
            .fetch_optional(pool)
            .await
    }

    /// Delete a resource and its content blocks.
    ///
    /// Runs in a transaction, blocks first. Returns whether the resource
    /// existed.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM content_blocks WHERE resource_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let resource = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(resource.rows_affected() > 0)
    }
}
