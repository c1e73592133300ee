//! SQLite schema definitions and SQL query builders.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

use bookquery_core::catalog::BookQuery;
use rusqlite::types::Value;

use super::conversions::format_date;

/// SQL statement to create all tables.
///
/// Publication dates are stored as `YYYY-MM-DD` text, so range predicates
/// compare lexicographically in date order.
pub const CREATE_TABLES: &str = r#"
-- Books table
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    author TEXT,
    publication_date TEXT,
    summary TEXT
);

-- Indexes for pushed-down search predicates
CREATE INDEX IF NOT EXISTS idx_books_title ON books(title);
CREATE INDEX IF NOT EXISTS idx_books_author ON books(author);
CREATE INDEX IF NOT EXISTS idx_books_publication_date ON books(publication_date);
"#;

const SELECT_BOOK_COLUMNS: &str = "SELECT id, title, author, publication_date, summary FROM books";

pub const SELECT_ALL_BOOKS: &str = r#"
SELECT id, title, author, publication_date, summary
FROM books
ORDER BY id ASC
"#;

pub const SELECT_BOOK_BY_ID: &str = r#"
SELECT id, title, author, publication_date, summary
FROM books
WHERE id = ?1
"#;

pub const INSERT_BOOK: &str = r#"
INSERT INTO books (title, author, publication_date, summary)
VALUES (?1, ?2, ?3, ?4)
"#;

/// Updates a book only while every column still holds its previously read
/// value. `IS` compares NULLs as equal.
pub const UPDATE_BOOK_IF_UNCHANGED: &str = r#"
UPDATE books
SET title = ?2, author = ?3, publication_date = ?4, summary = ?5
WHERE id = ?1
  AND title IS ?6
  AND author IS ?7
  AND publication_date IS ?8
  AND summary IS ?9
"#;

pub const DELETE_BOOK: &str = r#"
DELETE FROM books
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";

/// Builds the SELECT for a search, pushing every predicate into the WHERE
/// clause.
///
/// Returns the SQL text and its positional parameters. Rows with a NULL in a
/// constrained column never match, since any comparison with NULL is NULL.
pub fn select_books_matching(query: &BookQuery) -> (String, Vec<Value>) {
    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    let mut push = |clause: &str, value: Value| {
        params.push(value);
        clauses.push(format!("{clause} ?{}", params.len()));
    };

    if let Some(id) = query.id {
        push("id =", Value::Integer(id));
    }
    if let Some(title) = &query.title {
        push("title =", Value::Text(title.clone()));
    }
    if let Some(author) = &query.author {
        push("author =", Value::Text(author.clone()));
    }
    if let Some(from) = &query.date_from {
        push("publication_date >=", Value::Text(format_date(from)));
    }
    if let Some(to) = &query.date_to {
        push("publication_date <=", Value::Text(format_date(to)));
    }

    let mut sql = String::from(SELECT_BOOK_COLUMNS);
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY id ASC");

    (sql, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS books"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(SELECT_ALL_BOOKS.contains("ORDER BY id ASC"));
        assert!(SELECT_BOOK_BY_ID.contains("WHERE id = ?1"));
        assert!(INSERT_BOOK.contains("INSERT"));
        assert!(UPDATE_BOOK_IF_UNCHANGED.contains("title IS ?6"));
        assert!(UPDATE_BOOK_IF_UNCHANGED.contains("summary IS ?9"));
        assert!(DELETE_BOOK.contains("DELETE"));
    }

    #[test]
    fn test_empty_query_has_no_where_clause() {
        let (sql, params) = select_books_matching(&BookQuery::default());

        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY id ASC"));
        assert!(params.is_empty());
    }

    #[test]
    fn test_single_predicate() {
        let (sql, params) = select_books_matching(&BookQuery::new().with_author("X"));

        assert!(sql.contains("WHERE author = ?1"));
        assert_eq!(params, vec![Value::Text("X".to_string())]);
    }

    #[test]
    fn test_predicates_are_anded_in_order() {
        let query = BookQuery::new()
            .with_id(4)
            .with_title("A")
            .with_date_from(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
            .with_date_to(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());

        let (sql, params) = select_books_matching(&query);

        assert!(sql.contains(
            "WHERE id = ?1 AND title = ?2 AND publication_date >= ?3 AND publication_date <= ?4"
        ));
        assert_eq!(
            params,
            vec![
                Value::Integer(4),
                Value::Text("A".to_string()),
                Value::Text("2020-01-01".to_string()),
                Value::Text("2020-12-31".to_string()),
            ]
        );
    }
}
