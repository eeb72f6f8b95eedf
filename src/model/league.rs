use serde::{ser::SerializeMap, Serialize, Serializer};

/// Queue type of the ranked solo/duo ladder.
pub const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

/// Identity lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiotAccount {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueEntry {
    pub queue_type: String,
    pub tier: String,
    /// Division within the tier, absent for the apex tiers.
    pub rank: Option<String>,
    pub league_points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankSummary {
    Unranked,
    Ranked {
        tier: String,
        division: Option<String>,
        league_points: i32,
    },
}

impl RankSummary {
    /// Picks the solo queue entry out of the ranked entries of a player.
    pub fn from_entries(entries: &[LeagueEntry]) -> Self {
        match entries.iter().find(|e| e.queue_type == SOLO_QUEUE) {
            Some(entry) => RankSummary::Ranked {
                tier: entry.tier.clone(),
                division: entry.rank.clone(),
                league_points: entry.league_points,
            },
            None => RankSummary::Unranked,
        }
    }
}

// `{"ranked": false}` or `{"ranked": true, "tier", "rank", "lp"}`, with `rank` kept as null
impl Serialize for RankSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RankSummary::Unranked => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("ranked", &false)?;
                map.end()
            }
            RankSummary::Ranked {
                tier,
                division,
                league_points,
            } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("ranked", &true)?;
                map.serialize_entry("tier", tier)?;
                map.serialize_entry("rank", division)?;
                map.serialize_entry("lp", league_points)?;
                map.end()
            }
        }
    }
}
