//! trivia-server binary.
//!
//! Reads `trivia.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the trivia JSON API over HTTP.
//!
//! # Sample data
//!
//! To start with a handful of questions in an empty database:
//!
//! ```
//! cargo run -p trivia-server -- --seed
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use trivia_server::ServerConfig;
use trivia_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Trivia API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "trivia.toml")]
  config: PathBuf,

  /// Insert sample questions if the database has none.
  #[arg(long)]
  seed: bool,

  /// Use a throwaway in-memory database instead of `database_path`.
  #[arg(long)]
  in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to read config from {:?}", cli.config))?;

  // Open SQLite store.
  let store = if cli.in_memory {
    SqliteStore::open_in_memory()
      .await
      .context("failed to open in-memory store")?
  } else {
    let store_path = expand_tilde(&server_cfg.database_path);
    SqliteStore::open(&store_path)
      .await
      .with_context(|| format!("failed to open store at {store_path:?}"))?
  };

  if cli.seed {
    store
      .seed_sample_questions()
      .await
      .context("failed to seed sample questions")?;
  }

  let app = trivia_server::app(Arc::new(store));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
