use std::{fmt, sync::Arc};

use json::JsonValue;
use serde::Serialize;
use thiserror::Error;

use crate::{
    config::RiotApiConfig,
    model::{
        league::{LeagueEntry, RankSummary, RiotAccount},
        riot_id::{RiotId, Server},
    },
    service::{
        gameapi::{
            parsing::{account::parse_account, league::parse_league_entries, ParsingError},
            riot_api_client::{HttpTransport, TransportError},
        },
        puuid_cache::PuuidCache,
    },
};

const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LookupStep {
    Account,
    League,
}

impl fmt::Display for LookupStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LookupStep::Account => write!(f, "ACCOUNT"),
            LookupStep::League => write!(f, "LEAGUE"),
        }
    }
}

/// A provider call that did not produce usable data.
#[derive(Debug, Error)]
pub enum UpstreamFailure {
    #[error("{step} lookup failed: {source}")]
    Network {
        step: LookupStep,
        #[source]
        source: TransportError,
    },
    #[error("{step} lookup returned HTTP {status}")]
    Status { step: LookupStep, status: u16, body: String },
    #[error("{step} lookup returned an unexpected body: {source}")]
    Malformed {
        step: LookupStep,
        status: u16,
        body: String,
        #[source]
        source: ParsingError,
    },
}

impl UpstreamFailure {
    pub fn step(&self) -> LookupStep {
        match self {
            Self::Network { step, .. } | Self::Status { step, .. } | Self::Malformed { step, .. } => *step,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { .. } => None,
            Self::Status { status, .. } | Self::Malformed { status, .. } => Some(*status),
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Network { .. } => None,
            Self::Status { body, .. } | Self::Malformed { body, .. } => Some(body),
        }
    }
}

/// Resolves a riot id into its solo queue rank.
///
/// Every resolution performs the account lookup on the routing region and then the
/// league entries lookup on the platform of the chosen server. The second call is
/// only made once the first produced a puuid.
pub struct RankResolver {
    config: RiotApiConfig,
    transport: Arc<dyn HttpTransport>,
    cache: Option<PuuidCache>,
}

impl RankResolver {
    pub fn new(config: RiotApiConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config,
            transport,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: PuuidCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub async fn resolve(&self, riot_id: &RiotId, server: Server) -> Result<RankSummary, UpstreamFailure> {
        let account = self.lookup_account(riot_id).await?;
        let entries = self.lookup_entries(server, &account.puuid).await?;

        Ok(RankSummary::from_entries(&entries))
    }

    pub async fn lookup_account(&self, riot_id: &RiotId) -> Result<RiotAccount, UpstreamFailure> {
        if let Some(cache) = &self.cache {
            if let Some(account) = cache.get(riot_id).await {
                tracing::debug!(%riot_id, "Using cached puuid");
                return Ok(account);
            }
        }

        let url = format!(
            "https://{}.{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.config.routing_region,
            self.config.api_host,
            urlencoding::encode(&riot_id.name),
            urlencoding::encode(&riot_id.tag)
        );

        let account = self.fetch(LookupStep::Account, &url, parse_account).await?;

        if let Some(cache) = &self.cache {
            cache.store(riot_id.clone(), account.clone()).await;
        }

        Ok(account)
    }

    pub async fn lookup_entries(&self, server: Server, puuid: &str) -> Result<Vec<LeagueEntry>, UpstreamFailure> {
        let url = format!(
            "https://{}.{}/lol/league/v4/entries/by-puuid/{}",
            server.platform_code(),
            self.config.api_host,
            puuid
        );

        self.fetch(LookupStep::League, &url, parse_league_entries).await
    }

    async fn fetch<T>(
        &self,
        step: LookupStep,
        url: &str,
        parse: fn(&JsonValue) -> Result<T, ParsingError>,
    ) -> Result<T, UpstreamFailure> {
        tracing::debug!(%step, url, "Requesting riot api");

        let response = self
            .transport
            .get(url, &[(RIOT_TOKEN_HEADER, self.config.api_key.as_str())])
            .await
            .map_err(|source| UpstreamFailure::Network { step, source })?;

        if !response.is_success() {
            return Err(UpstreamFailure::Status {
                step,
                status: response.status,
                body: response.body,
            });
        }

        match json::parse(&response.body).map_err(ParsingError::from).and_then(|json| parse(&json)) {
            Ok(value) => Ok(value),
            Err(source) => Err(UpstreamFailure::Malformed {
                step,
                status: response.status,
                body: response.body,
                source,
            }),
        }
    }
}
