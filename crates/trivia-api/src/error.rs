//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure leaves the service as the same JSON shape:
//! `{"success": false, "error": <status>, "message": <reason phrase>}`.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("method not allowed")]
  MethodNotAllowed,

  #[error("unprocessable entity: {0}")]
  Unprocessable(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Wrap a backend error from a read path.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store(Box::new(e))
  }

  pub fn status_code(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// The fixed message sent to clients. Details stay in the logs.
  pub fn message(&self) -> &'static str {
    match self {
      ApiError::NotFound(_) => "Not Found",
      ApiError::MethodNotAllowed => "Method Not Allowed",
      ApiError::Unprocessable(_) => "Unprocessable Entity",
      ApiError::Store(_) => "Internal Server Error",
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::Unprocessable(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match &self {
      ApiError::Store(e) => tracing::error!(error = %e, "store failure"),
      other => tracing::debug!(error = %other, "request rejected"),
    }

    let status = self.status_code();
    let body = json!({
      "success": false,
      "error":   status.as_u16(),
      "message": self.message(),
    });
    (status, Json(body)).into_response()
  }
}
