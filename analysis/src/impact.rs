//! Combines the per-round stat bundle into a single 0-100 impact score.

use crate::perround::RoundStats;
use common::{CombatStats, EconomyStats, PositionType, PositioningStats, RoundOutcome, UtilityStats};

pub const COMBAT_WEIGHT: f64 = 0.40;
pub const ECONOMY_WEIGHT: f64 = 0.20;
pub const POSITION_WEIGHT: f64 = 0.25;
pub const UTILITY_WEIGHT: f64 = 0.15;

const WON_MULTIPLIER: f64 = 1.15;
const LOST_MULTI_KILL_MULTIPLIER: f64 = 1.05;
const EXCEPTIONAL_MULTIPLIER: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub combat: f64,
    pub economy: f64,
    pub position: f64,
    pub utility: f64,
}

impl SubScores {
    pub fn weighted(&self) -> f64 {
        self.combat * COMBAT_WEIGHT
            + self.economy * ECONOMY_WEIGHT
            + self.position * POSITION_WEIGHT
            + self.utility * UTILITY_WEIGHT
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

pub fn combat_score(combat: &CombatStats) -> f64 {
    let mut score = (combat.kills as f64 * 25.0).min(50.0);
    score -= score.min(combat.deaths as f64 * 15.0);
    score += (combat.assists as f64 * 10.0).min(20.0);
    score += combat.headshot_percentage / 100.0 * 20.0;

    if combat.got_trade_kill {
        score += 5.0;
    }
    if combat.was_traded {
        score -= 5.0;
    }

    clamp_score(score)
}

pub fn economy_score(economy: &EconomyStats, damage_dealt: u32) -> f64 {
    let loadout = economy.loadout_value as f64;
    let ratio = loadout / economy.enemy_loadout_value.max(1.0);

    let mut score = 100.0 * (ratio + 0.3).min(1.0);
    score += (damage_dealt as f64 / loadout.max(1.0) * 50.0).min(30.0);

    clamp_score(score)
}

pub fn kill_multiplier(position_type: PositionType) -> f64 {
    match position_type {
        PositionType::Entry => 15.0,
        PositionType::Anchor => 10.0,
        PositionType::Lurk => 12.0,
        PositionType::Aggressive => 12.0,
        _ => 10.0,
    }
}

pub fn death_penalty(position_type: PositionType) -> f64 {
    match position_type {
        PositionType::Entry => 5.0,
        PositionType::Anchor => 15.0,
        PositionType::Lurk => 12.0,
        PositionType::Aggressive => 8.0,
        _ => 10.0,
    }
}

pub fn position_score(positioning: &PositioningStats, combat: &CombatStats) -> f64 {
    let mut score = 50.0;

    if positioning.first_contact {
        if combat.deaths > 0 {
            score -= 20.0;
        } else if combat.kills > 0 {
            score += 30.0;
        }
    }

    score += combat.kills as f64 * kill_multiplier(positioning.position_type);
    score -= combat.deaths as f64 * death_penalty(positioning.position_type);

    clamp_score(score)
}

pub fn utility_score(utility: &UtilityStats) -> f64 {
    let usage = utility.abilities_used as f64 / (utility.total_abilities as f64).max(1.0);
    let damage = (utility.utility_damage as f64 / 300.0 * 40.0).min(40.0);

    clamp_score(usage * 60.0 + damage)
}

pub fn sub_scores(stats: &RoundStats) -> SubScores {
    SubScores {
        combat: combat_score(&stats.combat),
        economy: economy_score(&stats.economy, stats.combat.damage_dealt),
        position: position_score(&stats.positioning, &stats.combat),
        utility: utility_score(&stats.utility),
    }
}

/// Applies the round outcome and the exceptional performance bonus to the
/// weighted sub-scores.
pub fn apply_outcome(weighted: f64, outcome: RoundOutcome, combat: &CombatStats) -> f64 {
    let mut score = match outcome {
        RoundOutcome::Won => weighted * WON_MULTIPLIER,
        RoundOutcome::Lost if combat.kills >= 2 => weighted * LOST_MULTI_KILL_MULTIPLIER,
        RoundOutcome::Lost => weighted,
    };

    if combat.kills >= 3 && combat.deaths == 0 {
        score = (score * EXCEPTIONAL_MULTIPLIER).min(100.0);
    }

    score
}

pub fn calculate(stats: &RoundStats) -> u8 {
    let scores = sub_scores(stats);
    let score = apply_outcome(scores.weighted(), stats.outcome, &stats.combat);

    tracing::trace!(?scores, score, "Impact");

    clamp_score(score.round()) as u8
}
