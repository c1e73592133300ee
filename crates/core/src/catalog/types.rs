use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned book identifier.
pub type BookId = i64;

/// A book record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub summary: Option<String>,
}

impl Book {
    /// Creates a book with the given id and no attributes set.
    pub fn new(id: BookId) -> Self {
        Self {
            id,
            title: None,
            author: None,
            publication_date: None,
            summary: None,
        }
    }

    /// Builds a book from an assigned id and its mutable attributes.
    pub fn from_fields(id: BookId, fields: BookFields) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            publication_date: fields.publication_date,
            summary: fields.summary,
        }
    }

    /// Overwrites every mutable attribute with the given fields.
    ///
    /// Attributes absent from `fields` are cleared. The id never changes.
    pub fn apply(&mut self, fields: BookFields) {
        self.title = fields.title;
        self.author = fields.author;
        self.publication_date = fields.publication_date;
        self.summary = fields.summary;
    }

    /// Returns the mutable attributes of this book.
    pub fn fields(&self) -> BookFields {
        BookFields {
            title: self.title.clone(),
            author: self.author.clone(),
            publication_date: self.publication_date,
            summary: self.summary.clone(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_publication_date(mut self, date: NaiveDate) -> Self {
        self.publication_date = Some(date);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// The mutable attributes of a book, used for inserts and updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub summary: Option<String>,
}

impl BookFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_publication_date(mut self, date: NaiveDate) -> Self {
        self.publication_date = Some(date);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}
