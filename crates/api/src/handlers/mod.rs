//! HTTP handlers, one module per entity.
//!
//! Handlers are thin: validate the request with `hub_core`, delegate to a
//! `hub_db` repository, and map sentinels (`None`/`false`) to 404 via
//! [`crate::error::AppError`].

pub mod category;
pub mod content_block;
pub mod resource;
pub mod theme_setting;
