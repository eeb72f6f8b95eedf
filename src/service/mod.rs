pub mod account_store;
pub mod gameapi;
pub mod puuid_cache;
pub mod rank_resolver;
