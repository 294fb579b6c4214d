/// One Challenger league as returned by the league-v4 endpoint.
#[derive(Debug, Clone, Default)]
pub struct LeagueSnapshot {
    pub league_id: Option<String>,
    pub name: Option<String>,
    pub queue: Option<String>,
    pub tier: Option<String>,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub summoner_name: Option<String>,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
    pub hot_streak: bool,
}
