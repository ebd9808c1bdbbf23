//! Repository for the `categories` table.
//!
//! Deleting a category cascades through its resources and their content
//! blocks in one transaction, bottom-up, so a partial cascade is never
//! observable.

use sqlx::PgPool;

use hub_core::types::DbId;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name, icon, created_at, updated_at";

/// Provides data access for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Create a new category.
    pub async fn create(pool: &PgPool, dto: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, icon) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&dto.name)
            .bind(&dto.icon)
            .fetch_one(pool)
            .await
    }

    /// List all categories in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a category.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns the
    /// updated row, or `None` if the ID does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET \
                 name = COALESCE($2, name), \
                 icon = COALESCE($3, icon), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.icon)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category and everything it owns.
    ///
    /// Runs in a transaction: content blocks of the category's resources
    /// first, then the resources, then the category row. Returns whether
    /// the category existed.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let blocks = sqlx::query(
            "DELETE FROM content_blocks \
             WHERE resource_id IN (SELECT id FROM resources WHERE category_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let resources = sqlx::query("DELETE FROM resources WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let category = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            category_id = id,
            resources = resources.rows_affected(),
            blocks = blocks.rows_affected(),
            "Cascade-deleted category"
        );

        Ok(category.rows_affected() > 0)
    }
}
