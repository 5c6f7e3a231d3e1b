use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use models::{NewTransaction, TransactionRecord};
use serde::Deserialize;
use tracing::info;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TransactionRecord>>, ApiError> {
    info!(page = ?params.page, limit = ?params.limit, "fetching transactions");
    let transactions = state.transactions.list(params.page, params.limit).await?;
    Ok(Json(transactions))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewTransaction>,
) -> Result<(StatusCode, Json<TransactionRecord>), ApiError> {
    input.validate()?;
    info!(
        user_id = ?input.user_id,
        book_id = ?input.book_id,
        transaction_type = %input.transaction_type,
        "creating transaction"
    );
    let record = state.transactions.create(&input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
