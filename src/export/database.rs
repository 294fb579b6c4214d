use std::path::Path;

use rusqlite::{named_params, Connection};

use crate::model::ranked::RankedRecord;

use super::{ExportError, Exporter};

const CREATE_PLAYERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS players (
    Rank INTEGER,
    SummonerName TEXT,
    LeaguePoints INTEGER,
    Wins INTEGER,
    Losses INTEGER,
    HotStreak TEXT,
    WinLossRatio TEXT
)";

const INSERT_PLAYER: &str = "INSERT INTO players (Rank, SummonerName, LeaguePoints, Wins, Losses, HotStreak, WinLossRatio)
    VALUES (:rank, :summoner_name, :league_points, :wins, :losses, :hot_streak, :win_loss_ratio)";

/// Appends rows to the `players` table of a SQLite file, creating the table on first use.
pub struct DbExporter;

impl Exporter for DbExporter {
    fn write(&self, records: &[RankedRecord], path: &Path) -> Result<(), ExportError> {
        let mut conn = Connection::open(path)?;
        conn.execute(CREATE_PLAYERS_TABLE, [])?;

        let tx = conn.transaction()?;
        {
            let mut insert = tx.prepare(INSERT_PLAYER)?;
            for record in records {
                insert.execute(named_params! {
                    ":rank": record.rank,
                    ":summoner_name": record.summoner_name,
                    ":league_points": record.league_points,
                    ":wins": record.wins,
                    ":losses": record.losses,
                    ":hot_streak": record.hot_streak,
                    ":win_loss_ratio": record.win_loss_ratio,
                })?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
