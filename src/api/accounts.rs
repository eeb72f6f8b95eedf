use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Serialize;

use crate::{
    error::AppError,
    model::account::{AccountRecord, AccountRequest, NewAccount},
};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    success: bool,
    data: Vec<AccountRecord>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    success: bool,
}

pub async fn list_accounts(State(state): State<AppState>) -> Result<Json<AccountsResponse>, AppError> {
    let data = state.store.list().await?;

    Ok(Json(AccountsResponse { success: true, data }))
}

pub async fn add_account(
    State(state): State<AppState>,
    payload: Result<Json<AccountRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Json(request) = payload?;
    let account = NewAccount::try_from(request)?;
    let record = state.store.insert(account).await?;

    tracing::info!(id = record.id, player = %record.player, riot_id = %record.riot_id, "Added account");

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn delete_account(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    let removed = state.store.delete_by_id(id).await?;
    tracing::info!(id, removed, "Deleted account");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_player_accounts(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(player) = path?;
    let removed = state.store.delete_by_player(&player).await?;
    tracing::info!(%player, removed, "Deleted accounts of player");

    Ok(StatusCode::NO_CONTENT)
}
