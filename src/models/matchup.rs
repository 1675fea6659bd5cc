//! Head-to-head models: pairwise matchup input and per-manager summaries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregated result between two managers across all their games.
///
/// Stored from one perspective only; the aggregator derives both views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupRecord {
    pub manager1: String,
    pub manager2: String,
    pub manager1_wins: u32,
    pub manager2_wins: u32,
    #[serde(default)]
    pub ties: u32,
}

impl MatchupRecord {
    pub fn new(
        manager1: impl Into<String>,
        manager2: impl Into<String>,
        manager1_wins: u32,
        manager2_wins: u32,
        ties: u32,
    ) -> Self {
        Self {
            manager1: manager1.into(),
            manager2: manager2.into(),
            manager1_wins,
            manager2_wins,
            ties,
        }
    }
}

/// Matchup record as it appears in a dataset file.
///
/// `ties` is kept as raw JSON so a malformed value can be coerced
/// instead of rejecting the whole line.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMatchupRecord {
    pub manager1: String,
    pub manager2: String,
    pub manager1_wins: u32,
    pub manager2_wins: u32,
    #[serde(default)]
    pub ties: Option<Value>,
}

impl RawMatchupRecord {
    /// Convert into a [`MatchupRecord`], coercing `ties` to 0 unless it is a
    /// non-negative integer that fits in a `u32`.
    pub fn normalize(self) -> MatchupRecord {
        let ties = self
            .ties
            .as_ref()
            .and_then(Value::as_u64)
            .and_then(|t| u32::try_from(t).ok())
            .unwrap_or(0);

        MatchupRecord {
            manager1: self.manager1,
            manager2: self.manager2,
            manager1_wins: self.manager1_wins,
            manager2_wins: self.manager2_wins,
            ties,
        }
    }
}

/// Whether a record against an opponent is winning, losing or level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Winning,
    Losing,
    Even,
}

/// One manager's record against a single opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentRecord {
    pub opponent: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Widened so the sum of three `u32` counts cannot overflow
    pub games_played: u64,
    /// "W-L", or "W-L-T" when there are ties
    pub record: String,
    pub outcome: Outcome,
}

impl OpponentRecord {
    pub fn new(opponent: impl Into<String>, wins: u32, losses: u32, ties: u32) -> Self {
        let outcome = match wins.cmp(&losses) {
            std::cmp::Ordering::Greater => Outcome::Winning,
            std::cmp::Ordering::Less => Outcome::Losing,
            std::cmp::Ordering::Equal => Outcome::Even,
        };

        Self {
            opponent: opponent.into(),
            wins,
            losses,
            ties,
            games_played: u64::from(wins) + u64::from(losses) + u64::from(ties),
            record: record_label(wins.into(), losses.into(), ties.into()),
            outcome,
        }
    }

    /// Decided games only; used for ordering opponents.
    pub fn decided_games(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }
}

/// Per-manager head-to-head summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerHeadToHead {
    pub manager: String,

    /// Most-played opponent first
    pub opponent_records: Vec<OpponentRecord>,

    pub total_wins: u64,
    pub total_losses: u64,
    pub total_ties: u64,
    pub total_games: u64,

    /// Percentage in 0..=100
    pub win_percentage: f64,
}

impl ManagerHeadToHead {
    /// Empty summary for a manager seen for the first time.
    pub fn new(manager: impl Into<String>) -> Self {
        Self {
            manager: manager.into(),
            opponent_records: Vec::new(),
            total_wins: 0,
            total_losses: 0,
            total_ties: 0,
            total_games: 0,
            win_percentage: 0.0,
        }
    }

    /// Append a record against one opponent and fold it into the totals.
    pub fn push_record(&mut self, record: OpponentRecord) {
        self.total_wins += u64::from(record.wins);
        self.total_losses += u64::from(record.losses);
        self.total_ties += u64::from(record.ties);
        self.total_games += record.games_played;
        self.opponent_records.push(record);
    }

    /// Overall record label.
    pub fn record(&self) -> String {
        record_label(self.total_wins, self.total_losses, self.total_ties)
    }

    /// Record against a specific opponent, exact name first, then
    /// case-insensitive.
    pub fn against(&self, opponent: &str) -> Option<&OpponentRecord> {
        self.opponent_records
            .iter()
            .find(|r| r.opponent == opponent)
            .or_else(|| {
                self.opponent_records
                    .iter()
                    .find(|r| r.opponent.eq_ignore_ascii_case(opponent))
            })
    }
}

/// Format a record as "W-L", appending "-T" only when there are ties.
pub fn record_label(wins: u64, losses: u64, ties: u64) -> String {
    if ties > 0 {
        format!("{}-{}-{}", wins, losses, ties)
    } else {
        format!("{}-{}", wins, losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_label() {
        assert_eq!(record_label(3, 1, 0), "3-1");
        assert_eq!(record_label(3, 1, 2), "3-1-2");
        assert_eq!(record_label(0, 0, 0), "0-0");
    }

    #[test]
    fn test_raw_matchup_missing_ties() {
        let raw: RawMatchupRecord = serde_json::from_str(
            r#"{"manager1":"A","manager2":"B","manager1_wins":3,"manager2_wins":1}"#,
        )
        .unwrap();
        assert_eq!(raw.normalize().ties, 0);
    }

    #[test]
    fn test_raw_matchup_malformed_ties() {
        for ties in [r#""two""#, "-1", "1.5", "null", "[1]"] {
            let json = format!(
                r#"{{"manager1":"A","manager2":"B","manager1_wins":3,"manager2_wins":1,"ties":{}}}"#,
                ties
            );
            let raw: RawMatchupRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(raw.normalize().ties, 0, "ties = {}", ties);
        }
    }

    #[test]
    fn test_raw_matchup_valid_ties() {
        let raw: RawMatchupRecord = serde_json::from_str(
            r#"{"manager1":"A","manager2":"B","manager1_wins":3,"manager2_wins":1,"ties":2}"#,
        )
        .unwrap();
        assert_eq!(raw.normalize().ties, 2);
    }

    #[test]
    fn test_raw_matchup_rejects_negative_wins() {
        let result: Result<RawMatchupRecord, _> = serde_json::from_str(
            r#"{"manager1":"A","manager2":"B","manager1_wins":-3,"manager2_wins":1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_opponent_record_outcome() {
        assert_eq!(OpponentRecord::new("B", 3, 1, 0).outcome, Outcome::Winning);
        assert_eq!(OpponentRecord::new("B", 1, 3, 0).outcome, Outcome::Losing);
        assert_eq!(OpponentRecord::new("B", 2, 2, 1).outcome, Outcome::Even);

        let json = serde_json::to_value(OpponentRecord::new("B", 3, 1, 0)).unwrap();
        assert_eq!(json["outcome"], "winning");
    }

    #[test]
    fn test_opponent_record_counts_near_max() {
        let record = OpponentRecord::new("B", u32::MAX, 1, u32::MAX);
        assert_eq!(record.games_played, 2 * u64::from(u32::MAX) + 1);
        assert_eq!(record.decided_games(), u64::from(u32::MAX) + 1);
        assert_eq!(record.outcome, Outcome::Winning);
    }

    #[test]
    fn test_push_record_updates_totals() {
        let mut summary = ManagerHeadToHead::new("A");
        summary.push_record(OpponentRecord::new("B", 3, 1, 0));
        summary.push_record(OpponentRecord::new("C", 2, 2, 1));

        assert_eq!(summary.total_wins, 5);
        assert_eq!(summary.total_losses, 3);
        assert_eq!(summary.total_ties, 1);
        assert_eq!(summary.total_games, 9);
        assert_eq!(summary.record(), "5-3-1");
        assert!(summary.against("c").is_some());
        assert!(summary.against("D").is_none());
    }

    #[test]
    fn test_against_prefers_exact_name() {
        let mut summary = ManagerHeadToHead::new("A");
        summary.push_record(OpponentRecord::new("joey", 1, 0, 0));
        summary.push_record(OpponentRecord::new("Joey", 0, 1, 0));

        assert_eq!(summary.against("Joey").unwrap().losses, 1);
        assert_eq!(summary.against("joey").unwrap().wins, 1);
        assert_eq!(summary.against("JOEY").unwrap().opponent, "joey");
    }

    #[test]
    fn test_push_record_totals_exceed_u32() {
        let mut summary = ManagerHeadToHead::new("A");
        summary.push_record(OpponentRecord::new("B", 3_000_000_000, 0, 0));
        summary.push_record(OpponentRecord::new("C", 3_000_000_000, 1, 0));

        assert_eq!(summary.total_wins, 6_000_000_000);
        assert_eq!(summary.total_games, 6_000_000_001);
        assert_eq!(summary.record(), "6000000000-1");
    }
}
