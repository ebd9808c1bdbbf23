//! Content block models and DTOs.
//!
//! The `content` column is JSONB; its shape is validated against the block
//! type at the API boundary (`hub_core::block`) and stored verbatim. The
//! ordering column is `sort_order` in the database but `order` on the wire.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use hub_core::types::{DbId, Timestamp};

/// A row from the `content_blocks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: DbId,
    pub resource_id: DbId,
    pub block_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: serde_json::Value,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a content block. The caller supplies the position
/// (typically the current block count for an append).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentBlock {
    pub resource_id: DbId,
    pub block_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: serde_json::Value,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

/// DTO for partially updating a content block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentBlock {
    pub block_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<serde_json::Value>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// Request body for reordering the blocks of a resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderBlocks {
    pub block_ids: Vec<DbId>,
}
