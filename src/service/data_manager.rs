use json::JsonValue;
use once_cell::unsync::OnceCell;
use thiserror::Error;

use crate::model::{ids::Region, league::LeagueSnapshot, locale::Locale, ranked::RankedRecord};

use super::{
    gameapi::{
        client::{FetchError, LeagueClient},
        parsing::{league::parse_league, ParsingError},
    },
    ranking::rank_entries,
};

/// Fetches the league of one region at most once and serves both the raw document and
/// the ranked rows from it.
pub struct LadderManager {
    client: LeagueClient,
    region: Region,
    raw_cache: OnceCell<JsonValue>,
    league_cache: OnceCell<LeagueSnapshot>,
}

impl LadderManager {
    pub fn new(client: LeagueClient, region: Region) -> Self {
        Self {
            client,
            region,
            raw_cache: OnceCell::new(),
            league_cache: OnceCell::new(),
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn get_raw(&self) -> DataRetrievalResult<&JsonValue> {
        self.raw_cache
            .get_or_try_init(|| Ok(self.client.fetch_challenger_league(&self.region)?))
    }

    pub fn get_league(&self) -> DataRetrievalResult<&LeagueSnapshot> {
        self.league_cache.get_or_try_init(|| {
            let raw = self.get_raw()?;
            let league = parse_league(raw)?;
            Ok(league)
        })
    }

    pub fn get_top_players(&self, count: u32, locale: Locale) -> DataRetrievalResult<Vec<RankedRecord>> {
        let league = self.get_league()?;
        Ok(rank_entries(league, count, locale))
    }
}

pub type DataRetrievalResult<T> = Result<T, DataRetrievalError>;

#[derive(Debug, Error)]
pub enum DataRetrievalError {
    #[error("Fetching the league failed: {0}")]
    FetchFailed(#[from] FetchError),
    #[error("League data is malformed: {0}")]
    ParsingFailed(#[from] ParsingError),
}
