//! SQLite backend for the trivia store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod rows;
mod schema;
mod seed;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use seed::SAMPLE_QUESTIONS;
pub use store::SqliteStore;
