//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-row mutations
//! (cascade deletes, reordering, active-theme flips) run inside a single
//! transaction.

pub mod category_repo;
pub mod content_block_repo;
pub mod resource_repo;
pub mod theme_setting_repo;

pub use category_repo::CategoryRepo;
pub use content_block_repo::{BlockUpdateOutcome, ContentBlockRepo};
pub use resource_repo::ResourceRepo;
pub use theme_setting_repo::{ThemeDeleteOutcome, ThemeSettingRepo};
