use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::{BookRecord, NewBook};
use tracing::info;

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BookRecord>>, ApiError> {
    info!("fetching all books");
    let books = state.catalog.get_all_books().await?;
    Ok(Json(books))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookRecord>, ApiError> {
    info!(id, "fetching book");
    let book = state.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Books owned by one user. Requires a valid bearer token; ownership is not
/// restricted to the token subject on this route.
pub async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<BookRecord>>, ApiError> {
    info!(user_id, "fetching books for user");
    let books = state.catalog.get_books_by_user(user_id).await?;
    Ok(Json(books))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewBook>,
) -> Result<(StatusCode, Json<BookRecord>), ApiError> {
    input.validate()?;
    info!(title = %input.title, "creating book");
    let book = state.catalog.create_book(&input).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<NewBook>,
) -> Result<Json<serde_json::Value>, ApiError> {
    input.validate()?;
    info!(id, "updating book");
    let message = state.catalog.update_book(id, &input).await?;
    Ok(Json(serde_json::json!({ "message": message })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    info!(id, "deleting book");
    let message = state.catalog.delete_book(id).await?;
    Ok(Json(serde_json::json!({ "message": message })))
}
