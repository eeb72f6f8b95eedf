use json::JsonValue;

use crate::model::league::LeagueEntry;

use super::ParsingError;

pub fn parse_league_entries(json: &JsonValue) -> Result<Vec<LeagueEntry>, ParsingError> {
    if !json.is_array() {
        return Err(ParsingError::InvalidType("root".into()));
    }

    let mut entries = Vec::new();

    for entry_json in json.members() {
        if let JsonValue::Object(entry) = entry_json {
            let queue_type = entry["queueType"]
                .as_str()
                .ok_or(ParsingError::InvalidType("queueType".into()))?
                .to_string();

            let tier = entry["tier"]
                .as_str()
                .ok_or(ParsingError::InvalidType("tier".into()))?
                .to_string();

            // Null or missing for master and above
            let rank = match &entry["rank"] {
                JsonValue::Null => None,
                value => Some(value.as_str().ok_or(ParsingError::InvalidType("rank".into()))?.to_string()),
            };

            let league_points = entry["leaguePoints"]
                .as_i32()
                .ok_or(ParsingError::InvalidType("leaguePoints".into()))?;

            entries.push(LeagueEntry {
                queue_type,
                tier,
                rank,
                league_points,
            });
        } else {
            return Err(ParsingError::InvalidType("children".into()));
        }
    }

    Ok(entries)
}
