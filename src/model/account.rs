use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Row of the `accounts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: i64,
    pub player: String,
    #[sqlx(rename = "riotId")]
    pub riot_id: String,
    pub server: String,
    #[sqlx(rename = "peakRank")]
    pub peak_rank: Option<String>,
    #[sqlx(rename = "peakDivision")]
    pub peak_division: Option<String>,
    #[sqlx(rename = "peakLP")]
    #[serde(rename = "peakLP")]
    pub peak_lp: Option<i64>,
}

/// Body of `POST /accounts` before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    pub player: Option<String>,
    pub riot_id: Option<String>,
    pub server: Option<String>,
    pub peak_rank: Option<String>,
    pub peak_division: Option<String>,
    #[serde(rename = "peakLP")]
    pub peak_lp: Option<i64>,
}

/// Validated account ready to be inserted. Peak fields are stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub player: String,
    pub riot_id: String,
    pub server: String,
    pub peak_rank: Option<String>,
    pub peak_division: Option<String>,
    pub peak_lp: Option<i64>,
}

impl TryFrom<AccountRequest> for NewAccount {
    type Error = AppError;

    fn try_from(req: AccountRequest) -> Result<Self, Self::Error> {
        fn required(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        match (required(req.player), required(req.riot_id), required(req.server)) {
            (Some(player), Some(riot_id), Some(server)) => Ok(Self {
                player,
                riot_id,
                server,
                peak_rank: req.peak_rank,
                peak_division: req.peak_division,
                peak_lp: req.peak_lp,
            }),
            _ => Err(AppError::Validation("Missing required fields".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(player: Option<&str>, riot_id: Option<&str>, server: Option<&str>) -> AccountRequest {
        AccountRequest {
            player: player.map(String::from),
            riot_id: riot_id.map(String::from),
            server: server.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_required_fields_only() {
        let account = NewAccount::try_from(request(Some("A"), Some("X#1"), Some("euw"))).unwrap();
        assert_eq!(account.player, "A");
        assert_eq!(account.riot_id, "X#1");
        assert_eq!(account.server, "euw");
        assert_eq!(account.peak_rank, None);
        assert_eq!(account.peak_lp, None);
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        let cases = [
            request(None, Some("X#1"), Some("euw")),
            request(Some("A"), None, Some("euw")),
            request(Some("A"), Some("X#1"), None),
            request(Some(""), Some("X#1"), Some("euw")),
        ];

        for req in cases {
            match NewAccount::try_from(req) {
                Err(AppError::Validation(msg)) => assert_eq!(msg, "Missing required fields"),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn body_uses_camel_case_field_names() {
        let body = r#"{"player":"A","riotId":"X#1","server":"eune","peakRank":"GOLD","peakDivision":"II","peakLP":42}"#;
        let req: AccountRequest = serde_json::from_str(body).unwrap();
        let account = NewAccount::try_from(req).unwrap();

        assert_eq!(account.peak_rank.as_deref(), Some("GOLD"));
        assert_eq!(account.peak_division.as_deref(), Some("II"));
        assert_eq!(account.peak_lp, Some(42));
    }

    #[test]
    fn record_serializes_with_column_names() {
        let record = AccountRecord {
            id: 7,
            player: "A".into(),
            riot_id: "X#1".into(),
            server: "euw".into(),
            peak_rank: None,
            peak_division: None,
            peak_lp: Some(10),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["riotId"], "X#1");
        assert_eq!(value["peakLP"], 10);
        assert!(value["peakRank"].is_null());
    }
}
