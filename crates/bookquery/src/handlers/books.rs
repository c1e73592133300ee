//! Book CRUD handlers.
//!
//! Every handler goes through the catalog, which owns the cached snapshot.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use bookquery_core::catalog::{BookId, BookQuery};

use crate::{
    handlers::AppError,
    models::{BookDto, BookPayload, SearchParams},
    state::AppState,
};

/// List all books (GET /api/books).
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<BookDto>>, AppError> {
    let books = state.catalog.list_all().await?;
    Ok(Json(books.into_iter().map(BookDto::from).collect()))
}

/// Search books (GET /api/books/Search).
///
/// No match is an empty array, never a 404.
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<BookDto>>, AppError> {
    let query = BookQuery::from(params);
    let books = state.catalog.search(&query).await?;
    Ok(Json(books.into_iter().map(BookDto::from).collect()))
}

/// Create a new book (POST /api/books).
///
/// Responds 201 with the created book and a `Location` that finds it again.
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> Result<impl IntoResponse, AppError> {
    let book = state.catalog.create(payload.into_fields()).await?;

    tracing::info!(book_id = book.id, "Created new book");

    let location = format!("/api/books/Search?id={}", book.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookDto::from(book)),
    ))
}

/// Replace a book by ID (PUT /api/books/{id}).
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
    Json(payload): Json<BookPayload>,
) -> Result<StatusCode, AppError> {
    state.catalog.update(id, payload.into_fields()).await?;

    tracing::info!(book_id = id, "Updated book");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book by ID (DELETE /api/books/{id}).
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> Result<StatusCode, AppError> {
    state.catalog.delete(id).await?;

    tracing::info!(book_id = id, "Deleted book");

    Ok(StatusCode::NO_CONTENT)
}
