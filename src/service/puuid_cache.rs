use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::model::{league::RiotAccount, riot_id::RiotId};

#[derive(Debug, Clone)]
struct CachedAccount {
    account: RiotAccount,
    cached_at: DateTime<Utc>,
}

/// In-memory cache of identity lookups.
///
/// A puuid never changes for an account, so only the first lookup step is cached.
/// Ranked entries are always fetched fresh.
#[derive(Clone)]
pub struct PuuidCache {
    ttl: Duration,
    accounts: Arc<RwLock<HashMap<RiotId, CachedAccount>>>,
}

impl PuuidCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, riot_id: &RiotId) -> Option<RiotAccount> {
        let cache = self.accounts.read().await;
        let entry = cache.get(riot_id)?;

        let age = Utc::now().signed_duration_since(entry.cached_at);

        (age < self.ttl).then(|| entry.account.clone())
    }

    pub async fn store(&self, riot_id: RiotId, account: RiotAccount) {
        self.store_at(riot_id, account, Utc::now()).await;
    }

    async fn store_at(&self, riot_id: RiotId, account: RiotAccount, cached_at: DateTime<Utc>) {
        let now = Utc::now();
        let mut cache = self.accounts.write().await;

        cache.retain(|_, entry| now.signed_duration_since(entry.cached_at) < self.ttl);
        cache.insert(riot_id, CachedAccount { account, cached_at });
    }
}
