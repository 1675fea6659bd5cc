//! Head-to-head aggregation.

use std::collections::HashMap;

use crate::models::{ManagerHeadToHead, MatchupRecord, OpponentRecord};

use super::calculate_win_percentage;

/// Managers in first-appearance order with an index for lookup.
#[derive(Default)]
struct ManagerAccumulator {
    summaries: Vec<ManagerHeadToHead>,
    index: HashMap<String, usize>,
}

impl ManagerAccumulator {
    fn entry(&mut self, manager: &str) -> &mut ManagerHeadToHead {
        let idx = match self.index.get(manager) {
            Some(&idx) => idx,
            None => {
                self.summaries.push(ManagerHeadToHead::new(manager));
                let idx = self.summaries.len() - 1;
                self.index.insert(manager.to_string(), idx);
                idx
            }
        };
        &mut self.summaries[idx]
    }
}

/// Build per-manager head-to-head summaries from pairwise records.
///
/// Every manager named in any record appears exactly once. Opponents are
/// ordered by decided games (most first) and managers by win percentage
/// (highest first); both sorts are stable so equal keys keep input order.
pub fn aggregate_head_to_head(matchups: &[MatchupRecord]) -> Vec<ManagerHeadToHead> {
    let mut acc = ManagerAccumulator::default();

    for m in matchups {
        acc.entry(&m.manager1).push_record(OpponentRecord::new(
            m.manager2.as_str(),
            m.manager1_wins,
            m.manager2_wins,
            m.ties,
        ));
        acc.entry(&m.manager2).push_record(OpponentRecord::new(
            m.manager1.as_str(),
            m.manager2_wins,
            m.manager1_wins,
            m.ties,
        ));
    }

    let mut summaries = acc.summaries;
    for summary in &mut summaries {
        summary.win_percentage =
            calculate_win_percentage(summary.total_wins, summary.total_losses, summary.total_ties);
        summary
            .opponent_records
            .sort_by(|a, b| b.decided_games().cmp(&a.decided_games()));
    }

    summaries.sort_by(|a, b| b.win_percentage.total_cmp(&a.win_percentage));
    summaries
}

/// Summary for a single manager.
///
/// An exact name match wins; otherwise the first case-insensitive match.
pub fn manager_head_to_head(
    matchups: &[MatchupRecord],
    manager: &str,
) -> Option<ManagerHeadToHead> {
    let summaries = aggregate_head_to_head(matchups);
    let idx = summaries
        .iter()
        .position(|s| s.manager == manager)
        .or_else(|| {
            summaries
                .iter()
                .position(|s| s.manager.eq_ignore_ascii_case(manager))
        })?;
    summaries.into_iter().nth(idx)
}
