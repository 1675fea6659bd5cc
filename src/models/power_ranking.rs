//! Power ranking models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single regular-season game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub season: i32,
    pub week: u32,
    pub home_manager: String,
    pub away_manager: String,
    pub home_score: f64,
    pub away_score: f64,
}

impl GameResult {
    pub fn new(
        season: i32,
        week: u32,
        home_manager: impl Into<String>,
        away_manager: impl Into<String>,
        home_score: f64,
        away_score: f64,
    ) -> Self {
        Self {
            season,
            week,
            home_manager: home_manager.into(),
            away_manager: away_manager.into(),
            home_score,
            away_score,
        }
    }

    /// Both scores zero means the game was never played.
    pub fn is_unplayed(&self) -> bool {
        self.home_score == 0.0 && self.away_score == 0.0
    }
}

/// A manager's power ranking after a given week.
///
/// Ranks are inverted: the best manager gets the number of teams,
/// the worst gets 1, and tied managers share the mean position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerPowerRank {
    pub manager: String,
    pub record_rank: f64,
    pub points_rank: f64,
    pub breakdown_rank: f64,
    pub total_rank: f64,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub total_points: f64,
    /// All-play wins against every other score of the week
    pub theoretical_wins: u32,
    pub theoretical_losses: u32,
    pub theoretical_ties: u32,
}

/// Rankings for one week, best total rank first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRankingWeek {
    pub week: u32,
    pub managers: Vec<ManagerPowerRank>,
}

/// Power rankings for a full season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonPowerRankings {
    pub season: i32,
    pub weeks: Vec<PowerRankingWeek>,
    /// 0 when no week has been played
    pub final_week: u32,
    pub final_rankings: Vec<ManagerPowerRank>,
}

/// One chart point: each manager's total rank for a week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub week: u32,
    #[serde(flatten)]
    pub ranks: BTreeMap<String, f64>,
}
