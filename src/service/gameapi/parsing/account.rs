use json::JsonValue;

use crate::model::league::RiotAccount;

use super::ParsingError;

pub fn parse_account(json: &JsonValue) -> Result<RiotAccount, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let puuid = obj["puuid"].as_str().ok_or(ParsingError::InvalidType("puuid".into()))?;
        let game_name = obj["gameName"].as_str().map(String::from);
        let tag_line = obj["tagLine"].as_str().map(String::from);

        return Ok(RiotAccount {
            puuid: puuid.to_string(),
            game_name,
            tag_line,
        });
    }

    Err(ParsingError::InvalidType("root".into()))
}
