use thiserror::Error;

pub mod account;
pub mod league;

#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] json::Error),
    #[error("Invalid type for field: {0}")]
    InvalidType(String),
}
