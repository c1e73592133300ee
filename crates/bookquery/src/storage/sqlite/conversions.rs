//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use bookquery_core::catalog::Book;
use chrono::NaiveDate;
use rusqlite::Row;

/// Column index of `publication_date` in every book SELECT.
const PUBLICATION_DATE_COLUMN: usize = 3;

/// Convert a SQLite row to a Book.
///
/// Expected columns: id, title, author, publication_date, summary
pub fn row_to_book(row: &Row) -> rusqlite::Result<Book> {
    let id: i64 = row.get(0)?;
    let title: Option<String> = row.get(1)?;
    let author: Option<String> = row.get(2)?;
    let publication_date: Option<String> = row.get(PUBLICATION_DATE_COLUMN)?;
    let summary: Option<String> = row.get(4)?;

    Ok(Book {
        id,
        title,
        author,
        publication_date: publication_date.as_deref().map(parse_date).transpose()?,
        summary,
    })
}

/// Parse a date from ISO 8601 string (YYYY-MM-DD).
fn parse_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            PUBLICATION_DATE_COLUMN,
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })
}

/// Format a NaiveDate for SQLite storage (YYYY-MM-DD).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format an optional date column value.
pub fn format_optional_date(date: Option<&NaiveDate>) -> Option<String> {
    date.map(format_date)
}
