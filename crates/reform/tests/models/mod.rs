//! Records shared by the integration tests.
//!
//! `people_reform.rs` is generated from `people.rs` by `reform-gen`; `bogus.rs` holds declarations which must be
//! rejected and is never generated from.  `hooks.rs` implements hooks outside the file the generator reads.
#![allow(dead_code)]

pub mod bogus;

pub use people::*;

/// Schema for [people] on SQLite, including the `legacy` schema as an attached database.
pub const SQLITE_SCHEMA: &str = r#"
ATTACH DATABASE ':memory:' AS legacy;

CREATE TABLE people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    group_id INTEGER DEFAULT 65534,
    name TEXT NOT NULL,
    email TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT
);

CREATE TABLE projects (
    name TEXT NOT NULL,
    id TEXT PRIMARY KEY,
    start TEXT
);

CREATE TABLE person_project (
    person_id INTEGER NOT NULL REFERENCES people(id) ON DELETE CASCADE,
    project_id TEXT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    UNIQUE(person_id, project_id)
);

CREATE TABLE legacy.people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT
);

CREATE TABLE id_only (
    id INTEGER PRIMARY KEY AUTOINCREMENT
);

CREATE TABLE extra (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    byte INTEGER NOT NULL,
    bytes BLOB NOT NULL
);
"#;

pub fn open_database() -> rusqlite::Connection {
    let conn = reform::sqlite::open_in_memory().unwrap();
    conn.execute_batch(SQLITE_SCHEMA).unwrap();
    conn
}
