pub mod account;
pub mod league;
pub mod riot_id;
