//! Row mapping between SQLite result rows and domain types.

use trivia_core::{category::Category, question::Question};

/// Column list matching [`question_from_row`].
pub const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Column list matching [`category_from_row`].
pub const CATEGORY_COLUMNS: &str = "id, type";

pub fn question_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Question> {
  Ok(Question {
    id:         row.get(0)?,
    question:   row.get(1)?,
    answer:     row.get(2)?,
    category:   row.get(3)?,
    difficulty: row.get(4)?,
  })
}

pub fn category_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Category> {
  Ok(Category {
    id:   row.get(0)?,
    kind: row.get(1)?,
  })
}
