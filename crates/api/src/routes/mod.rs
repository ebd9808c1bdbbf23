//! Route tree for the API.

pub mod category;
pub mod content_block;
pub mod health;
pub mod resource;
pub mod theme_setting;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /categories                              list, create
/// /categories/{id}                         get, update, delete (cascade)
///
/// /resources[?categoryId=N]                list, create
/// /resources/{id}                          get, update (PUT/PATCH), delete (cascade)
/// /resources/{id}/blocks                   list in display order
/// /resources/{id}/blocks/reorder           reorder (POST)
///
/// /blocks                                  create
/// /blocks/{id}                             get, update, delete
///
/// /theme-settings                          list, create
/// /theme-settings/active                   currently active theme
/// /theme-settings/{id}                     get, update, delete (refused if active)
/// /theme-settings/{id}/activate            make this the single active theme
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/resources", resource::router())
        .nest("/blocks", content_block::router())
        .nest("/theme-settings", theme_setting::router())
}
