//! Route definitions for content blocks addressed by ID.
//!
//! Listing and reordering blocks live under `/resources/{id}/blocks`; see
//! [`super::resource`].

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::content_block;
use crate::state::AppState;

/// Routes mounted at `/blocks`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(content_block::create))
        .route(
            "/{id}",
            get(content_block::get_by_id)
                .put(content_block::update)
                .delete(content_block::delete),
        )
}
