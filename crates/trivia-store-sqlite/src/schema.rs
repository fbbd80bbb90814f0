//! SQL schema for the trivia SQLite store.
//!
//! Executed once at connection startup. Categories are seeded here and never
//! written again.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS` / `OR IGNORE`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS categories (
    id    INTEGER PRIMARY KEY,
    type  TEXT NOT NULL UNIQUE COLLATE NOCASE
);

-- AUTOINCREMENT keeps ids of deleted questions from being handed out again.
CREATE TABLE IF NOT EXISTS questions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    question    TEXT    NOT NULL,
    answer      TEXT    NOT NULL,
    category    INTEGER NOT NULL REFERENCES categories(id),
    difficulty  INTEGER NOT NULL CHECK (difficulty BETWEEN 1 AND 5)
);

CREATE INDEX IF NOT EXISTS questions_category_idx ON questions(category);

INSERT OR IGNORE INTO categories (id, type) VALUES
    (1, 'Science'),
    (2, 'Art'),
    (3, 'Geography'),
    (4, 'History'),
    (5, 'Entertainment'),
    (6, 'Sports');

PRAGMA user_version = 1;
";
