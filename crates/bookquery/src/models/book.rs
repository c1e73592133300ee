use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bookquery_core::catalog::{Book, BookFields, BookId, BookQuery};
use bookquery_core::serde::{
    deserialize_optional_date, deserialize_optional_i64, deserialize_optional_string,
};

/// Wire representation of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: BookId,
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub summary: Option<String>,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            publication_date: book.publication_date,
            summary: book.summary,
        }
    }
}

/// Request body for creating or replacing a book.
///
/// The store assigns ids, so an `id` in the body is ignored. Fields left out
/// are stored as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl BookPayload {
    pub fn into_fields(self) -> BookFields {
        BookFields {
            title: self.title,
            author: self.author,
            publication_date: self.publication_date,
            summary: self.summary,
        }
    }
}

/// Query string of `GET /api/books/Search`. Empty values impose no constraint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub id: Option<BookId>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_to: Option<NaiveDate>,
}

impl From<SearchParams> for BookQuery {
    fn from(params: SearchParams) -> Self {
        BookQuery {
            id: params.id,
            title: params.title,
            author: params.author,
            date_from: params.date_from,
            date_to: params.date_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_uses_camel_case() {
        let book = Book::new(1)
            .with_title("A")
            .with_publication_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());

        let json = serde_json::to_value(BookDto::from(book)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "A",
                "author": null,
                "publicationDate": "2020-01-01",
                "summary": null
            })
        );
    }

    #[test]
    fn test_payload_ignores_id() {
        let payload: BookPayload =
            serde_json::from_str(r#"{"id": 77, "title": "A", "author": "X"}"#).unwrap();

        let fields = payload.into_fields();

        assert_eq!(fields, BookFields::new().with_title("A").with_author("X"));
    }

    #[test]
    fn test_payload_accepts_datetime_publication_date() {
        let payload: BookPayload =
            serde_json::from_str(r#"{"publicationDate": "2021-06-15T00:00:00"}"#).unwrap();

        assert_eq!(
            payload.publication_date,
            Some(NaiveDate::from_ymd_opt(2021, 6, 15).unwrap())
        );
    }

    #[test]
    fn test_payload_null_date_is_absent() {
        let payload: BookPayload =
            serde_json::from_str(r#"{"title": "A", "publicationDate": null}"#).unwrap();

        assert_eq!(payload.publication_date, None);
    }

    #[test]
    fn test_search_params_into_query() {
        let params: SearchParams = serde_json::from_str(
            r#"{"id": "", "title": "", "author": "X", "dateFrom": "2021-01-01", "dateTo": ""}"#,
        )
        .unwrap();

        let query = BookQuery::from(params);

        assert_eq!(
            query,
            BookQuery::new()
                .with_author("X")
                .with_date_from(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
        );
    }

    #[test]
    fn test_empty_search_params_are_unconstrained() {
        let query = BookQuery::from(SearchParams::default());
        assert!(query.is_empty());
    }
}
