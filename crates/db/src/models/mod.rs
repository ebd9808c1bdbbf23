//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Wire field names are camelCase (`categoryId`, `readTime`, `isActive`, ...)
//! to match the API contract; columns stay snake_case.

pub mod category;
pub mod content_block;
pub mod resource;
pub mod theme_setting;
