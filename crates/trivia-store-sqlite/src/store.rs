//! [`SqliteStore`] — the SQLite implementation of [`TriviaStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, functions::FunctionFlags};

use trivia_core::{
  category::Category,
  page::PageRequest,
  question::{NewQuestion, Question},
  store::{QuizQuery, TriviaStore},
};

use crate::{
  Error, Result,
  rows::{CATEGORY_COLUMNS, QUESTION_COLUMNS, category_from_row, question_from_row},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A trivia store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Register `casefold(text)` (Unicode lowercase) on the connection and
  /// apply the schema.
  pub(crate) async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.create_scalar_function(
          "casefold",
          1,
          FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
          |ctx| Ok(ctx.get::<String>(0)?.to_lowercase()),
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a question-returning query with positional integer/text parameters.
  async fn query_questions(
    &self,
    sql: String,
    params: Vec<rusqlite::types::Value>,
  ) -> Result<Vec<Question>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), question_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}

// ─── TriviaStore impl ────────────────────────────────────────────────────────

impl TriviaStore for SqliteStore {
  type Error = Error;

  // ── Categories ────────────────────────────────────────────────────────────

  async fn list_categories(&self) -> Result<Vec<Category>> {
    let categories = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id"))?;
        let rows = stmt
          .query_map([], category_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(categories)
  }

  async fn get_category(&self, id: i64) -> Result<Option<Category>> {
    let category = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1"),
            rusqlite::params![id],
            category_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(category)
  }

  async fn find_category(&self, name: &str) -> Result<Option<Category>> {
    let name = name.trim().to_owned();

    let category = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "SELECT {CATEGORY_COLUMNS} FROM categories WHERE type = ?1 COLLATE NOCASE"
            ),
            rusqlite::params![name],
            category_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(category)
  }

  // ── Questions — reads ─────────────────────────────────────────────────────

  async fn count_questions(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM questions", [], |r| r.get(0))?)
      })
      .await?;
    Ok(count.max(0) as u64)
  }

  async fn list_questions(&self, page: PageRequest) -> Result<Vec<Question>> {
    let Some(window) = page.window() else {
      return Ok(Vec::new());
    };

    self
      .query_questions(
        format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id LIMIT ?1 OFFSET ?2"),
        vec![window.limit.into(), window.offset.into()],
      )
      .await
  }

  async fn get_question(&self, id: i64) -> Result<Option<Question>> {
    let question = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
            rusqlite::params![id],
            question_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(question)
  }

  async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
    // instr() has no wildcards, so the term is matched literally.
    self
      .query_questions(
        format!(
          "SELECT {QUESTION_COLUMNS} FROM questions
           WHERE instr(casefold(question), ?1) > 0
           ORDER BY id"
        ),
        vec![term.to_lowercase().into()],
      )
      .await
  }

  async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>> {
    self
      .query_questions(
        format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id"),
        vec![category.into()],
      )
      .await
  }

  async fn random_question(&self, query: &QuizQuery) -> Result<Option<Question>> {
    let mut conds: Vec<String> = vec![];
    let mut params: Vec<i64> = vec![];

    if let Some(category) = query.category {
      conds.push("category = ?".to_owned());
      params.push(category);
    }
    if !query.exclude.is_empty() {
      let placeholders = vec!["?"; query.exclude.len()].join(", ");
      conds.push(format!("id NOT IN ({placeholders})"));
      params.extend_from_slice(&query.exclude);
    }

    let where_clause = if conds.is_empty() {
      String::new()
    } else {
      format!("WHERE {}", conds.join(" AND "))
    };
    let sql = format!(
      "SELECT {QUESTION_COLUMNS} FROM questions {where_clause} ORDER BY RANDOM() LIMIT 1"
    );

    let question = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(&sql, rusqlite::params_from_iter(params), question_from_row)
          .optional()?)
      })
      .await?;
    Ok(question)
  }

  // ── Questions — writes ────────────────────────────────────────────────────

  async fn add_question(&self, input: NewQuestion) -> Result<Question> {
    input.validate()?;

    let question   = input.question.clone();
    let answer     = input.answer.clone();
    let category   = input.category;
    let difficulty = input.difficulty;

    let id: Option<i64> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let known: bool = tx
          .query_row(
            "SELECT 1 FROM categories WHERE id = ?1",
            rusqlite::params![category],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        if !known {
          return Ok(None);
        }

        tx.execute(
          "INSERT INTO questions (question, answer, category, difficulty)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![question, answer, category, difficulty],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Some(id))
      })
      .await?;

    let id = id.ok_or(Error::UnknownCategory(category))?;
    Ok(input.into_question(id))
  }

  async fn delete_question(&self, id: i64) -> Result<Option<Question>> {
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("DELETE FROM questions WHERE id = ?1 RETURNING {QUESTION_COLUMNS}"),
            rusqlite::params![id],
            question_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(deleted)
  }
}
