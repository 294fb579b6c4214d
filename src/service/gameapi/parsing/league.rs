use json::{object::Object, JsonValue};

use crate::model::league::{Entry, LeagueSnapshot};

use super::ParsingError;

pub fn parse_league(json: &JsonValue) -> Result<LeagueSnapshot, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let entries = match &obj["entries"] {
            JsonValue::Null => Vec::new(),
            JsonValue::Array(entries) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| parse_entry(index, entry))
                .collect::<Result<Vec<_>, _>>()?,
            _ => return Err(ParsingError::InvalidType("entries".into())),
        };

        return Ok(LeagueSnapshot {
            league_id: optional_str(obj, "leagueId", || "leagueId".into())?,
            name: optional_str(obj, "name", || "name".into())?,
            queue: optional_str(obj, "queue", || "queue".into())?,
            tier: optional_str(obj, "tier", || "tier".into())?,
            entries,
        });
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_entry(index: usize, json: &JsonValue) -> Result<Entry, ParsingError> {
    let path = |key: &str| format!("entries[{}].{}", index, key);

    if let JsonValue::Object(obj) = json {
        return Ok(Entry {
            summoner_name: optional_str(obj, "summonerName", || path("summonerName"))?,
            league_points: u32_or_zero(obj, "leaguePoints", || path("leaguePoints"))?,
            wins: u32_or_zero(obj, "wins", || path("wins"))?,
            losses: u32_or_zero(obj, "losses", || path("losses"))?,
            hot_streak: match &obj["hotStreak"] {
                JsonValue::Null => false,
                value => value.as_bool().ok_or_else(|| ParsingError::InvalidType(path("hotStreak")))?,
            },
        });
    }

    Err(ParsingError::InvalidType(format!("entries[{}]", index)))
}

fn optional_str(obj: &Object, key: &str, path: impl Fn() -> String) -> Result<Option<String>, ParsingError> {
    match &obj[key] {
        JsonValue::Null => Ok(None),
        value => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| ParsingError::InvalidType(path())),
    }
}

/// Counters may arrive as whole floats (`100.0`), anything fractional or negative is rejected.
fn u32_or_zero(obj: &Object, key: &str, path: impl Fn() -> String) -> Result<u32, ParsingError> {
    match &obj[key] {
        JsonValue::Null => Ok(0),
        value => value
            .as_f64()
            .filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
            .map(|n| n as u32)
            .ok_or_else(|| ParsingError::InvalidType(path())),
    }
}
