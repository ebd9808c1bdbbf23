//! Route definitions for theme settings.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::theme_setting;
use crate::state::AppState;

/// Routes mounted at `/theme-settings`.
///
/// `/active` is a static segment and takes precedence over `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(theme_setting::list).post(theme_setting::create))
        .route("/active", get(theme_setting::get_active))
        .route(
            "/{id}",
            get(theme_setting::get_by_id)
                .put(theme_setting::update)
                .delete(theme_setting::delete),
        )
        .route("/{id}/activate", post(theme_setting::activate))
}
