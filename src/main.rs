use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::EnvFilter;

use crate::{
    api::AppState,
    config::{Args, Config},
    error::StartupError,
    service::{
        account_store::AccountStore, gameapi::riot_api_client::ReqwestTransport, puuid_cache::PuuidCache,
        rank_resolver::RankResolver,
    },
};

mod api;
mod config;
mod error;
mod model;
mod service;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(error) = run(Config::from(args)).await {
        tracing::error!("Error occured while running server: {}", error);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), StartupError> {
    tracing::info!(
        api_key_loaded = !config.riot_api.api_key.is_empty(),
        routing_region = %config.riot_api.routing_region,
        "Riot API configured"
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    let store = AccountStore::new(pool);
    store.init().await?;

    let transport = ReqwestTransport::new(config.request_timeout)?;
    let mut resolver = RankResolver::new(config.riot_api.clone(), Arc::new(transport));
    if let Some(ttl) = config.puuid_cache_ttl {
        tracing::info!("Caching puuids for {}s", ttl.num_seconds());
        resolver = resolver.with_cache(PuuidCache::new(ttl));
    }

    let app = api::router(AppState {
        store,
        resolver: Arc::new(resolver),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Backend running on http://{}", addr);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", error);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
