//! Weekly power rankings.
//!
//! Each week every manager who has played so far is ranked three ways on
//! cumulative numbers (wins, points scored, all-play "breakdown" wins). The
//! three ranks are summed into a total rank, where higher is better.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::{
    ChartPoint, GameResult, ManagerPowerRank, PowerRankingWeek, SeasonPowerRankings,
};

use super::rank_with_ties;

#[derive(Debug, Default, Clone)]
struct Running {
    wins: u32,
    losses: u32,
    ties: u32,
    points: f64,
    theoretical_wins: u32,
    theoretical_losses: u32,
    theoretical_ties: u32,
}

/// Cumulative per-manager totals in first-appearance order.
#[derive(Default)]
struct SeasonTotals {
    order: Vec<String>,
    totals: HashMap<String, Running>,
}

impl SeasonTotals {
    fn entry(&mut self, manager: &str) -> &mut Running {
        if !self.totals.contains_key(manager) {
            self.order.push(manager.to_string());
        }
        self.totals.entry(manager.to_string()).or_default()
    }

    fn get(&self, manager: &str) -> Running {
        self.totals.get(manager).cloned().unwrap_or_default()
    }
}

/// Seasons present in the game list, newest first.
pub fn available_seasons(games: &[GameResult]) -> Vec<i32> {
    let seasons: BTreeSet<i32> = games.iter().map(|g| g.season).collect();
    seasons.into_iter().rev().collect()
}

/// Compute week-by-week power rankings for one season.
///
/// Games with both scores at zero are treated as unplayed and skipped. A
/// game with equal positive scores is a tie.
pub fn season_power_rankings(games: &[GameResult], season: i32) -> SeasonPowerRankings {
    let mut by_week: BTreeMap<u32, Vec<&GameResult>> = BTreeMap::new();
    for game in games.iter().filter(|g| g.season == season && !g.is_unplayed()) {
        by_week.entry(game.week).or_default().push(game);
    }

    let mut totals = SeasonTotals::default();
    let mut weeks = Vec::with_capacity(by_week.len());

    for (week, week_games) in by_week {
        let mut scores: Vec<(String, f64)> = Vec::new();
        let mut set_score = |manager: &str, score: f64| {
            match scores.iter_mut().find(|(m, _)| m == manager) {
                Some(slot) => slot.1 = score,
                None => scores.push((manager.to_string(), score)),
            }
        };

        for game in &week_games {
            set_score(&game.home_manager, game.home_score);
            set_score(&game.away_manager, game.away_score);

            totals.entry(&game.home_manager).points += game.home_score;
            totals.entry(&game.away_manager).points += game.away_score;

            if game.home_score == game.away_score {
                totals.entry(&game.home_manager).ties += 1;
                totals.entry(&game.away_manager).ties += 1;
            } else if game.home_score > game.away_score {
                totals.entry(&game.home_manager).wins += 1;
                totals.entry(&game.away_manager).losses += 1;
            } else {
                totals.entry(&game.away_manager).wins += 1;
                totals.entry(&game.home_manager).losses += 1;
            }
        }

        for (manager, score) in &scores {
            let (mut w, mut l, mut t) = (0, 0, 0);
            for (other, other_score) in &scores {
                if other == manager {
                    continue;
                }
                if score > other_score {
                    w += 1;
                } else if score < other_score {
                    l += 1;
                } else {
                    t += 1;
                }
            }
            let running = totals.entry(manager);
            running.theoretical_wins += w;
            running.theoretical_losses += l;
            running.theoretical_ties += t;
        }

        weeks.push(PowerRankingWeek {
            week,
            managers: rank_week(&totals),
        });
    }

    let final_week = weeks.last().map(|w| w.week).unwrap_or(0);
    let final_rankings = weeks
        .last()
        .map(|w| w.managers.clone())
        .unwrap_or_default();

    SeasonPowerRankings {
        season,
        weeks,
        final_week,
        final_rankings,
    }
}

fn rank_week(totals: &SeasonTotals) -> Vec<ManagerPowerRank> {
    let values = |f: fn(&Running) -> f64| -> HashMap<String, f64> {
        let pairs: Vec<(String, f64)> = totals
            .order
            .iter()
            .map(|m| (m.clone(), f(&totals.get(m))))
            .collect();
        rank_with_ties(&pairs).into_iter().collect()
    };

    let record_ranks = values(|r: &Running| r.wins as f64);
    let points_ranks = values(|r: &Running| r.points);
    let breakdown_ranks = values(|r: &Running| r.theoretical_wins as f64);

    let mut ranked: Vec<ManagerPowerRank> = totals
        .order
        .iter()
        .map(|manager| {
            let running = totals.get(manager);
            let record_rank = record_ranks.get(manager).copied().unwrap_or(1.0);
            let points_rank = points_ranks.get(manager).copied().unwrap_or(1.0);
            let breakdown_rank = breakdown_ranks.get(manager).copied().unwrap_or(1.0);
            ManagerPowerRank {
                manager: manager.clone(),
                record_rank,
                points_rank,
                breakdown_rank,
                total_rank: record_rank + points_rank + breakdown_rank,
                wins: running.wins,
                losses: running.losses,
                ties: running.ties,
                total_points: running.points,
                theoretical_wins: running.theoretical_wins,
                theoretical_losses: running.theoretical_losses,
                theoretical_ties: running.theoretical_ties,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.total_rank.total_cmp(&a.total_rank));
    ranked
}

/// Power rankings for every season in the game list, newest first.
pub fn all_power_rankings(games: &[GameResult]) -> Vec<SeasonPowerRankings> {
    available_seasons(games)
        .into_iter()
        .map(|season| season_power_rankings(games, season))
        .collect()
}

/// Chart series: one point per week with each manager's total rank.
pub fn chart_series(rankings: &SeasonPowerRankings) -> Vec<ChartPoint> {
    rankings
        .weeks
        .iter()
        .map(|week| ChartPoint {
            week: week.week,
            ranks: week
                .managers
                .iter()
                .map(|m| (m.manager.clone(), m.total_rank))
                .collect(),
        })
        .collect()
}
