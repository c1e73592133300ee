mod book;

pub use book::{BookDto, BookPayload, SearchParams};
