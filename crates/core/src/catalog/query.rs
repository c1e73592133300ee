//! Search predicates over books.
//!
//! The same [`BookQuery`] drives both the in-memory filter applied to a cached
//! snapshot and the predicate push-down performed by store backends, so both
//! paths agree on what "matches" means.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{Book, BookId};

/// Search predicates. Every supplied predicate must hold; absent ones impose
/// no constraint.
///
/// A book whose compared attribute is absent never satisfies a predicate on
/// that attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookQuery {
    pub id: Option<BookId>,
    pub title: Option<String>,
    pub author: Option<String>,
    /// Inclusive lower bound on the publication date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the publication date.
    pub date_to: Option<NaiveDate>,
}

impl BookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: BookId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn with_date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Returns true when no predicate is set, i.e. the query selects every book.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.author.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Returns true if the book satisfies every supplied predicate.
    pub fn matches(&self, book: &Book) -> bool {
        self.id.is_none_or(|id| book.id == id)
            && self
                .title
                .as_deref()
                .is_none_or(|title| book.title.as_deref() == Some(title))
            && self
                .author
                .as_deref()
                .is_none_or(|author| book.author.as_deref() == Some(author))
            && self
                .date_from
                .is_none_or(|from| book.publication_date.is_some_and(|d| d >= from))
            && self
                .date_to
                .is_none_or(|to| book.publication_date.is_some_and(|d| d <= to))
    }
}

/// Filters books by the query, preserving their order.
pub fn filter_books(books: Vec<Book>, query: &BookQuery) -> Vec<Book> {
    if query.is_empty() {
        return books;
    }
    books.into_iter().filter(|book| query.matches(book)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new(1)
                .with_title("A")
                .with_author("X")
                .with_publication_date(date(2020, 1, 1)),
            Book::new(2)
                .with_title("B")
                .with_author("Y")
                .with_publication_date(date(2021, 6, 15)),
            Book::new(3).with_title("C"),
        ]
    }

    fn ids(books: &[Book]) -> Vec<BookId> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = BookQuery::new();

        assert!(query.is_empty());
        assert_eq!(ids(&filter_books(sample_books(), &query)), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_by_id() {
        let result = filter_books(sample_books(), &BookQuery::new().with_id(2));
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_filter_by_author() {
        let result = filter_books(sample_books(), &BookQuery::new().with_author("X"));
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_filter_by_title_is_exact() {
        let books = vec![Book::new(1).with_title("Dune"), Book::new(2).with_title("dune")];

        let result = filter_books(books, &BookQuery::new().with_title("Dune"));

        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let query = BookQuery::new()
            .with_date_from(date(2020, 1, 1))
            .with_date_to(date(2021, 6, 15));

        assert_eq!(ids(&filter_books(sample_books(), &query)), vec![1, 2]);
    }

    #[test]
    fn test_date_from_only() {
        let query = BookQuery::new().with_date_from(date(2021, 1, 1));
        assert_eq!(ids(&filter_books(sample_books(), &query)), vec![2]);
    }

    #[test]
    fn test_date_to_only() {
        let query = BookQuery::new().with_date_to(date(2020, 12, 31));
        assert_eq!(ids(&filter_books(sample_books(), &query)), vec![1]);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let query = BookQuery::new()
            .with_date_from(date(2022, 1, 1))
            .with_date_to(date(2019, 1, 1));

        assert!(filter_books(sample_books(), &query).is_empty());
    }

    #[test]
    fn test_missing_attribute_never_matches() {
        // Book 3 has no author and no publication date
        let by_author = BookQuery::new().with_author("X");
        let by_date = BookQuery::new().with_date_from(date(1900, 1, 1));
        let book = Book::new(3).with_title("C");

        assert!(!by_author.matches(&book));
        assert!(!by_date.matches(&book));
    }

    #[test]
    fn test_predicates_are_anded() {
        let query = BookQuery::new().with_author("X").with_title("B");
        assert!(filter_books(sample_books(), &query).is_empty());

        let query = BookQuery::new().with_author("Y").with_title("B");
        assert_eq!(ids(&filter_books(sample_books(), &query)), vec![2]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let books = vec![
            Book::new(9).with_author("X"),
            Book::new(4).with_author("X"),
            Book::new(6).with_author("X"),
        ];

        let result = filter_books(books, &BookQuery::new().with_author("X"));

        assert_eq!(ids(&result), vec![9, 4, 6]);
    }
}
