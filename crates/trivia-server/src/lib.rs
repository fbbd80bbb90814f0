//! HTTP wiring for the trivia service.
//!
//! Wraps the [`trivia_api`] router with request tracing and the CORS policy
//! the browser frontend expects, and loads the runtime configuration.

use std::{path::Path, sync::Arc};

use axum::{
  Router,
  http::{Method, header},
};
use config::{ConfigBuilder, ConfigError, builder::DefaultState};
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};
use trivia_core::store::TriviaStore;

// ─── Configuration ────────────────────────────────────────────────────────────

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_PATH: &str = "trivia.db";

/// Runtime server configuration, deserialised from `trivia.toml` and
/// `TRIVIA_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: std::path::PathBuf,
}

impl ServerConfig {
  /// Load from the TOML file at `path` (optional) with environment overrides.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("TRIVIA")),
    )
  }

  fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
    builder
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("database_path", DEFAULT_DATABASE_PATH)?
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Any origin may call the API with the usual verbs.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PATCH,
      Method::DELETE,
      Method::OPTIONS,
    ])
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Build the complete application for `store`.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: TriviaStore + 'static,
{
  trivia_api::api_router(store)
    .layer(TraceLayer::new_for_http())
    .layer(cors_layer())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{body::Body, http::{Request, StatusCode}};
  use config::{File, FileFormat};
  use tower::ServiceExt as _;
  use trivia_store_sqlite::SqliteStore;

  async fn test_app() -> Router {
    let store = SqliteStore::open_in_memory().await.expect("in-memory store");
    app(Arc::new(store))
  }

  // ── Configuration ────────────────────────────────────────────────────────

  #[test]
  fn defaults_apply_without_sources() {
    let cfg = ServerConfig::from_builder(config::Config::builder()).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.database_path, std::path::PathBuf::from(DEFAULT_DATABASE_PATH));
    assert_eq!(cfg.address(), "127.0.0.1:5000");
  }

  #[test]
  fn file_values_override_defaults() {
    let toml = "port = 8080\ndatabase_path = \"/var/lib/trivia.db\"\n";
    let cfg = ServerConfig::from_builder(
      config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
    )
    .unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.database_path, std::path::PathBuf::from("/var/lib/trivia.db"));
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/trivia.toml"));
    assert!(cfg.is_ok(), "{cfg:?}");
  }

  // ── CORS ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn responses_allow_any_origin() {
    let req = Request::builder()
      .uri("/categories")
      .header(header::ORIGIN, "http://localhost:3000")
      .body(Body::empty())
      .unwrap();
    let resp = test_app().await.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
      "*"
    );
  }

  #[tokio::test]
  async fn preflight_lists_methods_and_headers() {
    let req = Request::builder()
      .method(Method::OPTIONS)
      .uri("/questions")
      .header(header::ORIGIN, "http://localhost:3000")
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
      .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
      .body(Body::empty())
      .unwrap();
    let resp = test_app().await.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let methods = resp
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_METHODS)
      .unwrap()
      .to_str()
      .unwrap()
      .to_owned();
    for m in ["GET", "POST", "PATCH", "DELETE", "OPTIONS"] {
      assert!(methods.contains(m), "{m} missing from {methods}");
    }
    let headers = resp
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
      .unwrap()
      .to_str()
      .unwrap()
      .to_ascii_lowercase();
    assert!(headers.contains("content-type"), "{headers}");
    assert!(headers.contains("authorization"), "{headers}");
  }

  // ── End to end ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn sqlite_backed_app_serves_seeded_categories() {
    let req = Request::builder().uri("/categories").body(Body::empty()).unwrap();
    let resp = test_app().await.oneshot(req).await.unwrap();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = std::str::from_utf8(&bytes).unwrap();
    assert!(body.contains("\"Total_Nums\":6"), "{body}");
    assert!(body.contains("\"type\":\"Entertainment\""), "{body}");
  }
}
