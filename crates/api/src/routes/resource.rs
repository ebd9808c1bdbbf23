//! Route definitions for resources and their nested block collection.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{content_block, resource};
use crate::state::AppState;

/// Routes mounted at `/resources`.
///
/// PATCH and PUT share one handler: both are partial updates against the
/// same `Option`-field DTO (PATCH is the conventional verb for category
/// reassignment).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list).post(resource::create))
        .route(
            "/{id}",
            get(resource::get_by_id)
                .put(resource::update)
                .patch(resource::update)
                .delete(resource::delete),
        )
        .route("/{id}/blocks", get(content_block::list_by_resource))
        .route("/{id}/blocks/reorder", post(content_block::reorder))
}
