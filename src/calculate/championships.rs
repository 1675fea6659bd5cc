//! Championship history analysis.

use std::collections::{HashMap, HashSet};

use crate::models::{ChampionshipRecord, LeaderboardEntry, StreakEntry};

/// Distinct champions in order of their first title.
pub fn all_champions(records: &[ChampionshipRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|r| r.champion.as_deref())
        .filter(|c| seen.insert(*c))
        .map(str::to_string)
        .collect()
}

/// Title counts, most titles first, ties broken by name ascending.
pub fn championship_leaderboard(records: &[ChampionshipRecord]) -> Vec<LeaderboardEntry> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for champion in records.iter().filter_map(|r| r.champion.as_deref()) {
        *counts.entry(champion).or_default() += 1;
    }

    let mut board: Vec<LeaderboardEntry> = counts
        .into_iter()
        .map(|(name, count)| LeaderboardEntry {
            name: name.to_string(),
            count,
        })
        .collect();
    board.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    board
}

/// Runs of two or more consecutive titles by the same manager.
///
/// Records are walked in year order. A season won by someone else, an
/// unrecorded champion, or a season missing from the data all end a run;
/// a later title by the same manager starts a separate entry. Longest
/// streaks come first, equal lengths in chronological order.
pub fn back_to_back_champions(records: &[ChampionshipRecord]) -> Vec<StreakEntry> {
    let mut sorted: Vec<&ChampionshipRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.year);

    let mut streaks: Vec<StreakEntry> = Vec::new();
    for pair in sorted.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        if previous.year.checked_add(1) != Some(current.year) {
            continue;
        }
        let champion = match (previous.champion.as_deref(), current.champion.as_deref()) {
            (Some(p), Some(c)) if p == c => c,
            _ => continue,
        };

        let open = streaks
            .iter_mut()
            .find(|s| s.manager == champion && s.end_year == previous.year);
        match open {
            Some(streak) => streak.end_year = current.year,
            None => streaks.push(StreakEntry {
                manager: champion.to_string(),
                start_year: previous.year,
                end_year: current.year,
                count: 2,
            }),
        }
    }

    for streak in &mut streaks {
        streak.count = (streak.end_year - streak.start_year + 1) as u32;
    }
    streaks.sort_by(|a, b| b.count.cmp(&a.count));
    streaks
}

/// A copy of the records, newest first when `reverse` is set.
pub fn championships_by_year(
    records: &[ChampionshipRecord],
    reverse: bool,
) -> Vec<ChampionshipRecord> {
    let mut copy = records.to_vec();
    if reverse {
        copy.reverse();
    }
    copy
}

/// Number of titles won by `manager`.
pub fn championship_count(records: &[ChampionshipRecord], manager: &str) -> usize {
    records.iter().filter(|r| r.won_by(manager)).count()
}

/// Seasons in which `manager` won the title.
pub fn championships_for<'a>(
    records: &'a [ChampionshipRecord],
    manager: &str,
) -> Vec<&'a ChampionshipRecord> {
    records.iter().filter(|r| r.won_by(manager)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seasons(data: &[(i32, Option<&str>)]) -> Vec<ChampionshipRecord> {
        data.iter()
            .map(|(year, champ)| ChampionshipRecord::new(*year, *champ))
            .collect()
    }

    fn streak(manager: &str, start_year: i32, end_year: i32, count: u32) -> StreakEntry {
        StreakEntry {
            manager: manager.to_string(),
            start_year,
            end_year,
            count,
        }
    }

    #[test]
    fn test_all_champions_first_appearance_order() {
        let records = seasons(&[
            (1999, Some("Ted")),
            (2000, None),
            (2001, Some("Ty")),
            (2002, Some("Ted")),
            (2003, Some("Ben")),
        ]);
        assert_eq!(all_champions(&records), vec!["Ted", "Ty", "Ben"]);
    }

    #[test]
    fn test_leaderboard_count_then_name() {
        let records = seasons(&[
            (2001, Some("Zed")),
            (2002, Some("Amy")),
            (2003, Some("Zed")),
            (2004, Some("Amy")),
            (2005, Some("Bob")),
            (2006, None),
        ]);
        let board = championship_leaderboard(&records);
        let rows: Vec<_> = board.iter().map(|e| (e.name.as_str(), e.count)).collect();
        assert_eq!(rows, vec![("Amy", 2), ("Zed", 2), ("Bob", 1)]);
    }

    #[test]
    fn test_leaderboard_count_sum() {
        let records = seasons(&[
            (2001, Some("A")),
            (2002, None),
            (2003, Some("B")),
            (2004, Some("A")),
        ]);
        let total: u32 = championship_leaderboard(&records).iter().map(|e| e.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_leaderboard_deterministic() {
        let records = seasons(&[
            (2001, Some("C")),
            (2002, Some("B")),
            (2003, Some("A")),
            (2004, Some("D")),
        ]);
        let first = championship_leaderboard(&records);
        for _ in 0..5 {
            assert_eq!(championship_leaderboard(&records), first);
        }
        let names: Vec<_> = first.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_leaderboard_empty() {
        assert!(championship_leaderboard(&[]).is_empty());
    }

    #[test]
    fn test_back_to_back_two_in_a_row() {
        let records = seasons(&[(2009, Some("Lanny")), (2010, Some("Joey")), (2011, Some("Joey"))]);
        assert_eq!(
            back_to_back_champions(&records),
            vec![streak("Joey", 2010, 2011, 2)]
        );
    }

    #[test]
    fn test_back_to_back_three_peat() {
        let records = seasons(&[
            (2020, Some("X")),
            (2021, Some("X")),
            (2022, Some("X")),
            (2023, Some("Y")),
        ]);
        assert_eq!(
            back_to_back_champions(&records),
            vec![streak("X", 2020, 2022, 3)]
        );
    }

    #[test]
    fn test_back_to_back_unsorted_input() {
        let records = seasons(&[(2022, Some("X")), (2020, Some("X")), (2021, Some("X"))]);
        assert_eq!(
            back_to_back_champions(&records),
            vec![streak("X", 2020, 2022, 3)]
        );
    }

    #[test]
    fn test_back_to_back_gap_starts_new_streak() {
        let records = seasons(&[
            (2001, Some("X")),
            (2002, Some("X")),
            (2003, Some("Y")),
            (2004, Some("X")),
            (2005, Some("X")),
            (2006, Some("X")),
        ]);
        assert_eq!(
            back_to_back_champions(&records),
            vec![streak("X", 2004, 2006, 3), streak("X", 2001, 2002, 2)]
        );
    }

    #[test]
    fn test_back_to_back_missing_season_breaks_streak() {
        let records = seasons(&[(2001, Some("X")), (2003, Some("X"))]);
        assert!(back_to_back_champions(&records).is_empty());
    }

    #[test]
    fn test_back_to_back_null_champions_never_match() {
        let records = seasons(&[(2001, None), (2002, None), (2003, Some("X"))]);
        assert!(back_to_back_champions(&records).is_empty());
    }

    #[test]
    fn test_back_to_back_league_history() {
        let streaks = back_to_back_champions(&crate::data::championships());
        assert_eq!(
            streaks,
            vec![
                streak("Ted", 1999, 2001, 3),
                streak("Ty", 2002, 2003, 2),
                streak("Joey", 2010, 2011, 2),
            ]
        );
    }

    #[test]
    fn test_championships_by_year() {
        let records = seasons(&[(2001, Some("A")), (2002, Some("B")), (2003, Some("C"))]);

        let newest_first = championships_by_year(&records, true);
        let years: Vec<_> = newest_first.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2003, 2002, 2001]);

        let oldest_first = championships_by_year(&records, false);
        assert_eq!(oldest_first, records);

        // Source untouched
        assert_eq!(records[0].year, 2001);
    }

    #[test]
    fn test_championship_count_and_seasons() {
        let records = crate::data::championships();
        assert_eq!(championship_count(&records, "Ted"), 5);
        assert_eq!(championship_count(&records, "Nobody"), 0);

        let years: Vec<_> = championships_for(&records, "Joey")
            .iter()
            .map(|r| r.year)
            .collect();
        assert_eq!(years, vec![2006, 2010, 2011, 2019]);
    }

    #[test]
    fn test_back_to_back_at_year_limit() {
        let records = seasons(&[
            (i32::MAX - 2, Some("X")),
            (i32::MAX - 1, Some("X")),
            (i32::MAX, Some("X")),
        ]);
        assert_eq!(
            back_to_back_champions(&records),
            vec![StreakEntry {
                manager: "X".to_string(),
                start_year: i32::MAX - 2,
                end_year: i32::MAX,
                count: 3,
            }]
        );
    }
}
