//! Request extractors with rejections matching the API error contract.

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor.
///
/// Same as [`axum::Json`], except that a malformed or wrong-shaped body is
/// reported as a 400 `VALIDATION_ERROR` in the usual `{"error","code"}`
/// shape instead of axum's default rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
