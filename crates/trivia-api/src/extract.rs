//! Request extractors whose rejections use [`ApiError`].

use axum::extract::FromRequest;

use crate::error::ApiError;

/// [`axum::Json`], except a missing content type, malformed JSON or a body
/// of the wrong shape answers 422 with the standard error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
