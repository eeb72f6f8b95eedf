use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    model::{
        league::{RankSummary, RiotAccount},
        riot_id::{parse_rank_target, RiotId},
    },
};

use super::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankQuery {
    riot_id: Option<String>,
    server: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccountLookupResponse {
    success: bool,
    data: RiotAccount,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub async fn get_rank(
    State(state): State<AppState>,
    query: Result<Query<RankQuery>, QueryRejection>,
) -> Result<Json<RankSummary>, AppError> {
    let Query(query) = query?;
    let (Some(riot_id), Some(server)) = (non_empty(query.riot_id), non_empty(query.server)) else {
        return Err(AppError::Validation("Missing riotId or server".into()));
    };

    let (riot_id, server) = parse_rank_target(&riot_id, &server)?;

    tracing::info!(%riot_id, platform = server.platform_code(), "Resolving rank");
    let summary = state.resolver.resolve(&riot_id, server).await?;

    Ok(Json(summary))
}

/// Resolves only the account step, useful to check the api key and a riot id.
pub async fn get_account(
    State(state): State<AppState>,
    query: Result<Query<RankQuery>, QueryRejection>,
) -> Result<Json<AccountLookupResponse>, AppError> {
    let Query(query) = query?;
    let riot_id = non_empty(query.riot_id)
        .ok_or_else(|| AppError::Validation("Missing riotId".into()))?
        .parse::<RiotId>()?;

    let data = state.resolver.lookup_account(&riot_id).await?;

    Ok(Json(AccountLookupResponse { success: true, data }))
}
