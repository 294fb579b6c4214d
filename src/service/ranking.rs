use std::cmp::Reverse;

use crate::model::{
    league::{Entry, LeagueSnapshot},
    locale::Locale,
    ranked::RankedRecord,
};

/// Orders the league by points (ties keep their source order) and turns the top `count`
/// entries into export rows.
pub fn rank_entries(league: &LeagueSnapshot, count: u32, locale: Locale) -> Vec<RankedRecord> {
    let mut sorted = league.entries.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|e| Reverse(e.league_points));

    (1u32..)
        .zip(sorted.into_iter().take(count as usize))
        .map(|(rank, entry)| to_record(rank, entry, locale))
        .collect()
}

fn to_record(rank: u32, entry: &Entry, locale: Locale) -> RankedRecord {
    RankedRecord {
        rank,
        summoner_name: entry
            .summoner_name
            .clone()
            .unwrap_or_else(|| locale.unknown_name().to_string()),
        league_points: entry.league_points,
        wins: entry.wins,
        losses: entry.losses,
        hot_streak: locale.yes_no(entry.hot_streak).to_string(),
        win_loss_ratio: win_loss_ratio(entry.wins, entry.losses, locale),
    }
}

/// Two decimals, ties rounded half to even by the float formatter.
pub fn win_loss_ratio(wins: u32, losses: u32, locale: Locale) -> String {
    if losses == 0 {
        return locale.infinite().to_string();
    }
    format!("{:.2}", f64::from(wins) / f64::from(losses))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, league_points: u32, wins: u32, losses: u32) -> Entry {
        Entry {
            summoner_name: Some(name.to_string()),
            league_points,
            wins,
            losses,
            hot_streak: false,
        }
    }

    fn league(entries: Vec<Entry>) -> LeagueSnapshot {
        LeagueSnapshot {
            entries,
            ..Default::default()
        }
    }

    #[test]
    fn sorts_descending_and_keeps_tie_order() {
        let league = league(vec![
            entry("low", 10, 1, 1),
            entry("tie-first", 500, 1, 1),
            entry("top", 900, 1, 1),
            entry("tie-second", 500, 1, 1),
            entry("tie-third", 500, 1, 1),
        ]);

        let names = rank_entries(&league, 10, Locale::En)
            .into_iter()
            .map(|r| r.summoner_name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["top", "tie-first", "tie-second", "tie-third", "low"]);
    }

    #[test]
    fn truncates_to_requested_count() {
        let league = league((0..8).map(|i| entry(&format!("p{}", i), i * 10, 1, 1)).collect());

        assert_eq!(rank_entries(&league, 1, Locale::En).len(), 1);
        assert_eq!(rank_entries(&league, 5, Locale::En).len(), 5);
        assert_eq!(rank_entries(&league, 8, Locale::En).len(), 8);
        assert_eq!(rank_entries(&league, 300, Locale::En).len(), 8);
    }

    #[test]
    fn ranks_are_contiguous_from_one() {
        let league = league((0..6).map(|i| entry("p", 100 - i, 1, 1)).collect());
        let ranks = rank_entries(&league, 4, Locale::En)
            .iter()
            .map(|r| r.rank)
            .collect::<Vec<_>>();
        assert_eq!(ranks, [1, 2, 3, 4]);
    }

    #[test]
    fn ratio_is_infinite_without_losses() {
        assert_eq!(win_loss_ratio(0, 0, Locale::En), "infinite");
        assert_eq!(win_loss_ratio(42, 0, Locale::En), "infinite");
        assert_eq!(win_loss_ratio(42, 0, Locale::Fr), "Infini");
    }

    #[test]
    fn ratio_has_two_decimals() {
        assert_eq!(win_loss_ratio(7, 2, Locale::En), "3.50");
        assert_eq!(win_loss_ratio(5, 5, Locale::En), "1.00");
        assert_eq!(win_loss_ratio(2, 3, Locale::En), "0.67");
        assert_eq!(win_loss_ratio(0, 4, Locale::En), "0.00");
    }

    #[test]
    fn equal_points_keep_source_order_with_ratio_tokens() {
        let league = league(vec![entry("A", 100, 10, 0), entry("B", 100, 5, 5)]);

        let records = rank_entries(&league, 2, Locale::En);
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].rank, records[0].summoner_name.as_str()), (1, "A"));
        assert_eq!(records[0].win_loss_ratio, "infinite");
        assert_eq!((records[1].rank, records[1].summoner_name.as_str()), (2, "B"));
        assert_eq!(records[1].win_loss_ratio, "1.00");
    }

    #[test]
    fn missing_name_and_hot_streak_use_locale_tokens() {
        let league = league(vec![Entry {
            hot_streak: true,
            ..Default::default()
        }]);

        let en = &rank_entries(&league, 1, Locale::En)[0];
        assert_eq!(en.summoner_name, "Unknown");
        assert_eq!(en.hot_streak, "Yes");

        let fr = &rank_entries(&league, 1, Locale::Fr)[0];
        assert_eq!(fr.summoner_name, "Nom inconnu");
        assert_eq!(fr.hot_streak, "Oui");
        assert_eq!(fr.win_loss_ratio, "Infini");
    }

    #[test]
    fn empty_league_ranks_nothing() {
        assert!(rank_entries(&LeagueSnapshot::default(), 10, Locale::En).is_empty());
    }
}
