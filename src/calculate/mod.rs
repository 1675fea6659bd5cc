//! Statistics calculation engine.
//!
//! Pure derivations over in-memory league data:
//! - Head-to-head summaries from pairwise matchup records
//! - Championship leaderboard and back-to-back streaks
//! - Weekly power rankings from game results
//!
//! Nothing here performs I/O or keeps state between calls.

pub mod championships;
pub mod head_to_head;
pub mod power_rankings;

pub use championships::*;
pub use head_to_head::*;
pub use power_rankings::*;

use crate::models::LeaderboardEntry;

/// Win percentage (0 to 100) from wins/losses/ties.
///
/// Ties count toward games played but not toward wins.
pub fn calculate_win_percentage(wins: u64, losses: u64, ties: u64) -> f64 {
    let total = wins + losses + ties;
    if total == 0 {
        0.0
    } else {
        wins as f64 / total as f64 * 100.0
    }
}

/// Display rank for each leaderboard position.
///
/// A position gets `index + 1` only when its count differs from the
/// previous entry; equal counts after the first get `None` (rendered as a
/// placeholder rather than a repeated or skipped number).
pub fn rank_labels(leaderboard: &[LeaderboardEntry]) -> Vec<Option<u32>> {
    leaderboard
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if index > 0 && leaderboard[index - 1].count == entry.count {
                None
            } else {
                Some(index as u32 + 1)
            }
        })
        .collect()
}

/// Rank values with tie averaging, higher value = better = higher rank.
///
/// The best of `values.len()` entries gets rank `n`, the worst gets 1.
/// A tie group shares the mean of the positions it spans, so two managers
/// tied for 8th/9th of 10 both get 2.5.
pub fn rank_with_ties(values: &[(String, f64)]) -> Vec<(String, f64)> {
    let n = values.len();
    let mut sorted: Vec<&(String, f64)> = values.iter().collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut ranks = Vec::with_capacity(n);
    let mut i = 0;
    while i < n {
        let value = sorted[i].1;
        let mut j = i;
        while j < n && sorted[j].1 == value {
            j += 1;
        }

        let rank_start = (n - j + 1) as f64;
        let rank_end = (n - i) as f64;
        let avg_rank = (rank_start + rank_end) / 2.0;

        for (name, _) in &sorted[i..j] {
            ranks.push((name.clone(), avg_rank));
        }
        i = j;
    }

    ranks
}
