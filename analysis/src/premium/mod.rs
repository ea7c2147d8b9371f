//! Heuristic premium scores for agents, maps, weapons, seasons and matches,
//! and the policy that marks the best of them as premium.

use crate::tiers::ratio;
use common::ClutchCounts;

pub mod agent;
pub mod map;
pub mod matches;
pub mod policy;
pub mod season;
pub mod weapon;

/// Multiplier for seasons that are still running.
pub const ACTIVE_SEASON_MULTIPLIER: f64 = 1.5;

const CLUTCH_CAP: f64 = 20.0;

const CONSISTENT_KD: f64 = 1.2;
const CONSISTENT_WIN_RATE: f64 = 0.52;

pub fn kd_ratio(kills: u32, deaths: u32) -> f64 {
    ratio(kills as f64, deaths as f64)
}

pub fn win_rate(won: u32, lost: u32) -> f64 {
    ratio(won as f64, won as f64 + lost as f64)
}

/// Clutches weighted by how many opponents were left, capped.
pub fn clutch_score(clutches: &ClutchCounts) -> f64 {
    let weighted = [clutches.v1, clutches.v2, clutches.v3, clutches.v4, clutches.v5]
        .iter()
        .zip(1..)
        .map(|(count, weight)| *count as f64 * weight as f64)
        .sum::<f64>();
    weighted.min(CLUTCH_CAP)
}

/// Rewards entities that perform well across most of their seasons, given the
/// K/D and win rate of every season.
pub fn consistency_bonus(seasons: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let (total, consistent) = seasons
        .into_iter()
        .fold((0usize, 0usize), |(total, consistent), (kd, win_rate)| {
            let good = kd > CONSISTENT_KD && win_rate > CONSISTENT_WIN_RATE;
            (total + 1, consistent + good as usize)
        });

    if total == 0 {
        return 0.0;
    }

    let share = consistent as f64 / total as f64;
    if share >= 0.7 {
        15.0
    } else if share >= 0.5 {
        8.0
    } else {
        0.0
    }
}
