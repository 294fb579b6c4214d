use serde::{Deserialize, Serialize};

/// One exported row. Field order is the column order of every export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RankedRecord {
    pub rank: u32,
    pub summoner_name: String,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
    pub hot_streak: String,
    pub win_loss_ratio: String,
}

impl RankedRecord {
    pub const FIELD_NAMES: [&'static str; 7] = [
        "Rank",
        "SummonerName",
        "LeaguePoints",
        "Wins",
        "Losses",
        "HotStreak",
        "WinLossRatio",
    ];
}
