use std::{fmt, time::Duration};

use clap::Parser;

const DEFAULT_API_HOST: &str = "api.riotgames.com";

/// Account list and ranked lookup backend
#[derive(Parser, Debug)]
#[command(name = "ranktracker")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Riot developer api key sent with every provider request
    #[arg(long, env = "RIOT_API_KEY", hide_env_values = true)]
    pub riot_api_key: String,

    /// Sqlite connection string of the account store
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://database.db?mode=rwc")]
    pub database_url: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Routing region used for account lookups
    #[arg(long, env = "RIOT_ROUTING_REGION", default_value = "europe")]
    pub routing_region: String,

    /// Timeout of a single provider request, in seconds
    #[arg(long, env = "RIOT_REQUEST_TIMEOUT", default_value_t = 10)]
    pub request_timeout: u64,

    /// How long resolved puuids are reused, in seconds. 0 disables the cache
    #[arg(long, env = "PUUID_CACHE_TTL", default_value_t = 0)]
    pub puuid_cache_ttl: i64,
}

/// Everything the rank resolver needs to talk to the provider.
#[derive(Clone)]
pub struct RiotApiConfig {
    pub api_key: String,
    pub routing_region: String,
    pub api_host: String,
}

impl fmt::Debug for RiotApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiotApiConfig")
            .field("api_key", &"<redacted>")
            .field("routing_region", &self.routing_region)
            .field("api_host", &self.api_host)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub request_timeout: Duration,
    pub puuid_cache_ttl: Option<chrono::Duration>,
    pub riot_api: RiotApiConfig,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            port: args.port,
            database_url: args.database_url,
            request_timeout: Duration::from_secs(args.request_timeout),
            puuid_cache_ttl: (args.puuid_cache_ttl > 0).then(|| chrono::Duration::seconds(args.puuid_cache_ttl)),
            riot_api: RiotApiConfig {
                api_key: args.riot_api_key,
                routing_region: args.routing_region,
                api_host: DEFAULT_API_HOST.to_string(),
            },
        }
    }
}
