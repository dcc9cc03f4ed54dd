//! Database model types for Diesel ORM.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::snippets;
use crate::domain::{Snippet, SnippetId};

/// Database row for a snippet (insertable).
///
/// Timestamps are naive UTC; the column type carries no offset.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = snippets)]
pub struct NewSnippetRow {
    pub title: String,
    pub content: String,
    pub created: NaiveDateTime,
    pub expires: NaiveDateTime,
}

/// Database row for a snippet (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = snippets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnippetRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: NaiveDateTime,
    pub expires: NaiveDateTime,
}

impl From<SnippetRow> for Snippet {
    fn from(row: SnippetRow) -> Self {
        Self {
            id: SnippetId::new(row.id),
            title: row.title,
            content: row.content,
            created: row.created.and_utc(),
            expires: row.expires.and_utc(),
        }
    }
}
