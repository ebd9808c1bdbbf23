//! Resource models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use hub_core::types::{DbId, Timestamp};

/// A row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub read_time: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a resource. `read_time` defaults to 5 minutes when
/// omitted (applied in the repository, not here).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResource {
    pub title: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub read_time: Option<i32>,
}

/// DTO for partially updating a resource.
///
/// Setting `category_id` is how a resource is reassigned to another category;
/// no other field is touched by that operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResource {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<DbId>,
    pub read_time: Option<i32>,
}
