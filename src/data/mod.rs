//! Built-in league datasets.
//!
//! Championship results and all-time record boards are maintained by hand
//! here. Dataset files in the data directory take precedence when present
//! (see [`crate::storage::LeagueDataset`]).

use crate::models::{AllTimeRecord, ChampionshipRecord, RecordHolder};

/// League name used when none is configured.
pub const LEAGUE_NAME: &str = "JBS Fantasy Football League";

/// First season of the league.
pub const ESTABLISHED: i32 = 1999;

fn season(
    year: i32,
    champion: Option<&str>,
    runner_up: Option<&str>,
    third_place: Option<&str>,
    regular_season_champ: Option<&str>,
    other_division_champ: Option<&str>,
    regular_season_most_points: Option<&str>,
) -> ChampionshipRecord {
    ChampionshipRecord {
        year,
        champion: champion.map(str::to_string),
        runner_up: runner_up.map(str::to_string),
        third_place: third_place.map(str::to_string),
        regular_season_champ: regular_season_champ.map(str::to_string),
        other_division_champ: other_division_champ.map(str::to_string),
        regular_season_most_points: regular_season_most_points.map(str::to_string),
    }
}

/// Season-by-season championship results, oldest first.
///
/// Placements other than the champion were not tracked before 2009.
pub fn championships() -> Vec<ChampionshipRecord> {
    vec![
        season(1999, Some("Ted"), None, None, None, None, None),
        season(2000, Some("Ted"), None, None, None, None, None),
        season(2001, Some("Ted"), None, None, None, None, None),
        season(2002, Some("Ty"), None, None, None, None, None),
        season(2003, Some("Ty"), None, None, None, None, None),
        season(2004, Some("Ted"), None, None, None, None, None),
        season(2005, Some("John"), None, None, None, None, None),
        season(2006, Some("Joey"), None, None, None, None, None),
        season(2007, Some("Ben"), None, None, None, None, None),
        season(2008, Some("Tyler"), None, None, None, None, None),
        season(
            2009,
            Some("Lanny"),
            Some("John"),
            Some("Matt"),
            Some("Matt"),
            Some("Peter"),
            Some("Lanny"),
        ),
        season(
            2010,
            Some("Joey"),
            Some("Matt"),
            Some("John"),
            Some("Joey"),
            Some("Peter"),
            Some("Peter"),
        ),
        season(
            2011,
            Some("Joey"),
            Some("Lanny"),
            Some("Tyler"),
            Some("Lanny"),
            Some("Joey"),
            Some("Joey"),
        ),
        season(
            2012,
            Some("Vernon"),
            Some("Lanny"),
            Some("Matt"),
            Some("Lanny"),
            Some("Vernon"),
            Some("Joey"),
        ),
        season(
            2013,
            Some("Peter"),
            Some("Tyler"),
            Some("Vernon"),
            Some("Ben"),
            Some("Vernon"),
            Some("Tyler"),
        ),
        season(
            2014,
            Some("Tyler"),
            Some("Joey"),
            Some("Lanny"),
            Some("Tyler"),
            Some("Lanny"),
            Some("Lanny"),
        ),
        season(
            2015,
            Some("John"),
            Some("Ben"),
            Some("Ted"),
            Some("Ted"),
            Some("Tyler"),
            Some("Ben"),
        ),
        season(
            2016,
            Some("Lanny"),
            Some("John"),
            Some("Matt"),
            Some("John"),
            Some("Lanny"),
            Some("John"),
        ),
        season(
            2017,
            Some("Tyler"),
            Some("John"),
            Some("Matt"),
            Some("John"),
            Some("Ben"),
            Some("John"),
        ),
        season(
            2018,
            Some("Peter"),
            Some("Matt"),
            Some("Tyler"),
            Some("Tyler"),
            Some("Peter"),
            Some("Tyler"),
        ),
        season(
            2019,
            Some("Joey"),
            Some("Peter"),
            Some("Ted"),
            Some("Jason"),
            Some("Joey"),
            Some("Ted"),
        ),
        season(
            2020,
            Some("Ted"),
            Some("Ben"),
            Some("Vernon"),
            Some("Vernon"),
            Some("Ben"),
            Some("Ben"),
        ),
        season(
            2021,
            Some("Peter"),
            Some("Vernon"),
            Some("John"),
            Some("Ben"),
            Some("Vernon"),
            Some("John"),
        ),
        season(
            2022,
            Some("Vernon"),
            Some("Tyler"),
            Some("John"),
            Some("John"),
            Some("Tyler"),
            Some("John"),
        ),
        season(
            2023,
            Some("Tyler"),
            Some("Ted"),
            Some("Matt"),
            Some("Tyler"),
            Some("Matt"),
            Some("Joey"),
        ),
        season(
            2024,
            Some("Matt"),
            Some("Jason"),
            Some("Peter"),
            Some("Peter"),
            Some("Ted"),
            Some("Ted"),
        ),
        season(
            2025,
            Some("Jason"),
            Some("Tyler"),
            Some("Matt"),
            Some("Tyler"),
            Some("Matt"),
            Some("Tyler"),
        ),
    ]
}

fn category(name: &str, holders: &[(u32, &str, &str, &str)]) -> AllTimeRecord {
    AllTimeRecord {
        category: name.to_string(),
        top5: holders
            .iter()
            .map(|(rank, holder, record, details)| RecordHolder {
                rank: *rank,
                holder: holder.to_string(),
                record: record.to_string(),
                details: details.to_string(),
            })
            .collect(),
    }
}

/// All-time record boards (regular season games only).
pub fn all_time_records() -> Vec<AllTimeRecord> {
    vec![
        category(
            "Highest Single Game Score",
            &[
                (1, "Lanny", "212.00 points", "Week 8, 2014"),
                (2, "Peter", "209.26 points", "Week 4, 2018"),
                (3, "Ted", "208.98 points", "Week 5, 2019"),
                (4, "Lanny", "208.26 points", "Week 5, 2021"),
                (5, "Tyler", "205.40 points", "Week 1, 2018"),
            ],
        ),
        category(
            "Most Points in a Season",
            &[
                (1, "John", "2069.20 points", "2022 Season"),
                (2, "John", "1979.82 points", "2021 Season"),
                (3, "Tyler", "1958.60 points", "2018 Season"),
                (4, "Ted", "1912.68 points", "2024 Season"),
                (5, "Jason", "1907.78 points", "2022 Season"),
            ],
        ),
        category(
            "Best Regular Season Record",
            &[
                (1, "John", "12-2", "2022 Season"),
                (2, "Tyler", "12-2", "2023 Season"),
                (3, "John", "11-2", "2016 Season"),
                (4, "Tyler", "11-2", "2018 Season"),
                (5, "Ben", "11-3", "2021 Season"),
            ],
        ),
        category(
            "Highest Average Points Per Game",
            &[
                (1, "Peter", "123.57 points", "Average across 226 games"),
                (2, "Jason", "123.03 points", "Average across 122 games"),
                (3, "Joey", "121.26 points", "Average across 226 games"),
                (4, "Ted", "121.18 points", "Average across 226 games"),
                (5, "John", "121.11 points", "Average across 226 games"),
            ],
        ),
    ]
}
