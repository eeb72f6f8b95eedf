use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::service::{account_store::AccountStore, rank_resolver::RankResolver};

mod accounts;
mod rank;

#[derive(Clone)]
pub struct AppState {
    pub store: AccountStore,
    pub resolver: Arc<RankResolver>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(status))
        .route("/heartbeat", get(heartbeat))
        .route("/accounts", get(accounts::list_accounts).post(accounts::add_account))
        .route("/accounts/:id", delete(accounts::delete_account))
        .route("/accounts/player/:player", delete(accounts::delete_player_accounts))
        .route("/rank", get(rank::get_rank))
        .route("/account", get(rank::get_account))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn status() -> Json<Value> {
    Json(json!({ "status": "Backend running" }))
}

async fn heartbeat() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
