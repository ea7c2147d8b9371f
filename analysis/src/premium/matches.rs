use super::kd_ratio;
use crate::{
    ladder,
    tiers::{ratio, Ladder},
};
use common::MatchStat;

pub const RANKED_MULTIPLIER: f64 = 1.2;
pub const UNRANKED_MULTIPLIER: f64 = 1.0;

/// Round combat score needed for a high impact round.
pub const HIGH_IMPACT_ROUND: u32 = 500;
pub const MEDIUM_IMPACT_ROUND: u32 = 300;

static KD: Ladder<'static> = ladder![2.0 => 20.0, 1.5 => 15.0, 1.0 => 10.0, 0.8 => 5.0];
static HEADSHOT_PERCENTAGE: Ladder<'static> = ladder![35.0 => 15.0, 25.0 => 10.0, 15.0 => 5.0];
static COMBAT_SCORE_PER_ROUND: Ladder<'static> =
    ladder![300.0 => 20.0, 250.0 => 15.0, 200.0 => 10.0, 150.0 => 5.0];
static KILL_SHARE: Ladder<'static> = ladder![0.35 => 8.0, 0.25 => 5.0, 0.2 => 2.0];

const CLUTCH_BONUS: f64 = 3.0;
const CLUTCH_CAP: f64 = 9.0;
const MULTI_KILL_CAP: f64 = 12.0;

pub fn headshot_percentage(stat: &MatchStat) -> f64 {
    let shots = stat.headshots as f64 + stat.bodyshots as f64 + stat.legshots as f64;
    ratio(stat.headshots as f64, shots) * 100.0
}

pub fn core_performance(stat: &MatchStat) -> f64 {
    KD.score(kd_ratio(stat.kills, stat.deaths))
        + HEADSHOT_PERCENTAGE.score(headshot_percentage(stat))
        + COMBAT_SCORE_PER_ROUND.score(ratio(stat.score as f64, stat.rounds_played as f64))
}

/// Rewards the share of rounds with a high or medium combat score.
pub fn round_impact(stat: &MatchStat) -> f64 {
    let rounds = stat.round_scores.len() as f64;
    let high = stat
        .round_scores
        .iter()
        .filter(|s| **s >= HIGH_IMPACT_ROUND)
        .count() as f64;
    let medium = stat
        .round_scores
        .iter()
        .filter(|s| (MEDIUM_IMPACT_ROUND..HIGH_IMPACT_ROUND).contains(*s))
        .count() as f64;

    ratio(high, rounds) * 20.0 + ratio(medium, rounds) * 10.0
}

pub fn clutch_and_multi_kill(stat: &MatchStat) -> f64 {
    let clutch = (stat.clutches as f64 * CLUTCH_BONUS).min(CLUTCH_CAP);
    let multi = stat.multi_kills.triple as f64 * 2.0
        + stat.multi_kills.quadra as f64 * 4.0
        + stat.multi_kills.penta as f64 * 6.0;

    clutch + multi.min(MULTI_KILL_CAP)
}

pub fn kill_share(stat: &MatchStat) -> f64 {
    KILL_SHARE.score(ratio(stat.kills as f64, stat.team_kills as f64))
}

pub fn score(stat: &MatchStat) -> f64 {
    let raw = core_performance(stat)
        + round_impact(stat)
        + clutch_and_multi_kill(stat)
        + kill_share(stat);
    let multiplier = if stat.is_ranked {
        RANKED_MULTIPLIER
    } else {
        UNRANKED_MULTIPLIER
    };

    let score = (raw * multiplier).clamp(0.0, 100.0);

    tracing::trace!(match_id = %stat.match_id, raw, score, "Match score");

    score
}
