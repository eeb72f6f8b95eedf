pub mod parsing;
pub mod riot_api_client;

#[cfg(test)]
pub mod fake;
