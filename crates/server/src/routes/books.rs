use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use service::Book;

use crate::errors::ApiError;
use crate::state::AppState;

const DELETED_MESSAGE: &str = "Libro eliminado correctamente";

#[derive(Serialize, Debug)]
pub struct DeletedBook {
    pub message: &'static str,
    pub book: Book,
}

#[utoipa::path(
    get, path = "/api/libros", tag = "libros",
    responses(
        (status = 200, description = "All books", body = [crate::openapi::BookDoc]),
        (status = 500, description = "Storage read failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.books.list().await?))
}

#[utoipa::path(
    get, path = "/api/libros/{id}", tag = "libros",
    params(("id" = String, Path, description = "Book id (UUID v4)")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BookDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not found", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Storage read failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_book(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Book>, ApiError> {
    Ok(Json(state.books.get(&id).await?))
}

/// A request without a JSON content type, or with an empty body, is treated
/// as an empty object, so it fails field validation. A body that cannot be
/// parsed is an unexpected error and gets the generic 500.
#[utoipa::path(
    post, path = "/api/libros", tag = "libros",
    request_body = crate::openapi::CreateBookRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BookDoc),
        (status = 400, description = "Missing or invalid fields", body = crate::openapi::ErrorBodyDoc),
        (status = 409, description = "Same title and year already exists", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let payload = if !is_json_content_type(&headers) || body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice::<Value>(&body)
            .map_err(|e| ApiError::internal(format!("invalid JSON body: {e}"), state.expose_errors))?
    };
    let book = state.books.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

#[utoipa::path(
    delete, path = "/api/libros/{id}", tag = "libros",
    params(("id" = String, Path, description = "Book id (UUID v4)")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DeletedBookDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not found", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete_book(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<DeletedBook>, ApiError> {
    let book = state.books.delete(&id).await?;
    Ok(Json(DeletedBook { message: DELETED_MESSAGE, book }))
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
