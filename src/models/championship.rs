//! Championship models.

use serde::{Deserialize, Serialize};

/// One league season's final results.
///
/// Only `year` and `champion` feed the aggregations; the remaining
/// placements are carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionshipRecord {
    /// Season year, unique per record
    pub year: i32,

    /// Playoff champion, if recorded
    pub champion: Option<String>,

    #[serde(default)]
    pub runner_up: Option<String>,

    #[serde(default)]
    pub third_place: Option<String>,

    /// Best regular season record
    #[serde(default)]
    pub regular_season_champ: Option<String>,

    #[serde(default)]
    pub other_division_champ: Option<String>,

    #[serde(default)]
    pub regular_season_most_points: Option<String>,
}

impl ChampionshipRecord {
    /// Record with only the year and champion known.
    pub fn new(year: i32, champion: Option<&str>) -> Self {
        Self {
            year,
            champion: champion.map(str::to_string),
            runner_up: None,
            third_place: None,
            regular_season_champ: None,
            other_division_champ: None,
            regular_season_most_points: None,
        }
    }

    /// Whether `manager` won the title this season.
    pub fn won_by(&self, manager: &str) -> bool {
        self.champion.as_deref() == Some(manager)
    }
}

/// Championship count for one manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub count: u32,
}

/// A run of consecutive titles by the same manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakEntry {
    pub manager: String,
    pub start_year: i32,
    pub end_year: i32,
    pub count: u32,
}

impl StreakEntry {
    /// Three or more in a row.
    pub fn is_three_peat_or_better(&self) -> bool {
        self.count > 2
    }
}
