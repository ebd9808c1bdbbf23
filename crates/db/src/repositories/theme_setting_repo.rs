//! Repository for the `theme_settings` table.
//!
//! Invariant: at most one theme has `is_active = true` at any time. Every
//! operation that can flip a theme to active first deactivates the others,
//! inside one transaction; a partial unique index
//! (`uq_theme_settings_active`) backs the invariant at the schema level.
//! The active theme cannot be deleted.

use sqlx::{PgConnection, PgPool};

use hub_core::types::DbId;

use crate::models::theme_setting::{CreateThemeSetting, ThemeSetting, UpdateThemeSetting};

/// Column list for `theme_settings` queries.
const COLUMNS: &str = "\
    id, name, primary_color, background_color, surface_color, border_color, \
    text_color, logo_url, is_active, created_at, updated_at";

/// Outcome of a guarded theme deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeDeleteOutcome {
    /// The theme existed and was deleted.
    Deleted,
    /// No theme with that ID exists.
    NotFound,
    /// The theme is currently active; deletion is refused.
    ActiveTheme,
}

/// Provides data access for theme settings.
pub struct ThemeSettingRepo;

impl ThemeSettingRepo {
    /// Create a new theme.
    ///
    /// When the DTO asks for an active theme, every existing theme is
    /// deactivated first, in the same transaction as the insert.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateThemeSetting,
    ) -> Result<ThemeSetting, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if dto.is_active == Some(true) {
            deactivate_all(&mut tx).await?;
        }

        let query = format!(
            "INSERT INTO theme_settings \
                 (name, primary_color, background_color, surface_color, \
                  border_color, text_color, logo_url, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, FALSE)) \
             RETURNING {COLUMNS}"
        );
        let theme = sqlx::query_as::<_, ThemeSetting>(&query)
            .bind(&dto.name)
            .bind(&dto.primary_color)
            .bind(&dto.background_color)
            .bind(&dto.surface_color)
            .bind(&dto.border_color)
            .bind(&dto.text_color)
            .bind(&dto.logo_url)
            .bind(dto.is_active)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(theme)
    }

    /// List all themes in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ThemeSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM theme_settings ORDER BY id");
        sqlx::query_as::<_, ThemeSetting>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a theme by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ThemeSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM theme_settings WHERE id = $1");
        sqlx::query_as::<_, ThemeSetting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the currently active theme, if any.
    pub async fn find_active(pool: &PgPool) -> Result<Option<ThemeSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM theme_settings WHERE is_active");
        sqlx::query_as::<_, ThemeSetting>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a theme.
    ///
    /// A patch that takes `is_active` from false to true deactivates every
    /// other theme first, in the same transaction. Patching the active theme
    /// to `is_active = false` simply applies (leaving zero active themes --
    /// the invariant is "at most one", not "exactly one"). Returns the
    /// updated row, or `None` if the ID does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateThemeSetting,
    ) -> Result<Option<ThemeSetting>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<(bool,)> =
            sqlx::query_as("SELECT is_active FROM theme_settings WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((currently_active,)) = current else {
            return Ok(None);
        };

        if dto.is_active == Some(true) && !currently_active {
            deactivate_all(&mut tx).await?;
        }

        let query = format!(
            "UPDATE theme_settings SET \
                 name = COALESCE($2, name), \
                 primary_color = COALESCE($3, primary_color), \
                 background_color = COALESCE($4, background_color), \
                 surface_color = COALESCE($5, surface_color), \
                 border_color = COALESCE($6, border_color), \
                 text_color = COALESCE($7, text_color), \
                 logo_url = COALESCE($8, logo_url), \
                 is_active = COALESCE($9, is_active), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let theme = sqlx::query_as::<_, ThemeSetting>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.primary_color)
            .bind(&dto.background_color)
            .bind(&dto.surface_color)
            .bind(&dto.border_color)
            .bind(&dto.text_color)
            .bind(&dto.logo_url)
            .bind(dto.is_active)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(theme))
    }

    /// Make the given theme the single active one.
    ///
    /// Runs in a transaction: deactivate every other theme, then activate
    /// the target. Returns `None` (and deactivates nothing) if the target
    /// does not exist.
    pub async fn set_active(pool: &PgPool, id: DbId) -> Result<Option<ThemeSetting>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM theme_settings WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(None);
        }

        sqlx::query(
            "UPDATE theme_settings SET is_active = FALSE, updated_at = NOW() \
             WHERE is_active AND id <> $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE theme_settings SET is_active = TRUE, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let theme = sqlx::query_as::<_, ThemeSetting>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(theme))
    }

    /// Delete a theme, refusing if it is currently active.
    ///
    /// Callers must activate a replacement before deleting the active theme.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<ThemeDeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<(bool,)> =
            sqlx::query_as("SELECT is_active FROM theme_settings WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((is_active,)) = current else {
            return Ok(ThemeDeleteOutcome::NotFound);
        };
        if is_active {
            return Ok(ThemeDeleteOutcome::ActiveTheme);
        }

        sqlx::query("DELETE FROM theme_settings WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ThemeDeleteOutcome::Deleted)
    }
}

/// Deactivate every active theme, stamping `updated_at` on rows actually
/// flipped.
async fn deactivate_all(tx: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE theme_settings SET is_active = FALSE, updated_at = NOW() \
         WHERE is_active",
    )
    .execute(tx)
    .await?;
    Ok(())
}
