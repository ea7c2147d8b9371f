use super::kd_ratio;
use crate::{
    ladder,
    tiers::{ratio, Ladder},
};
use common::SeasonStat;

const ACTIVE_MULTIPLIER: f64 = 1.15;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

static KD: Ladder<'static> = ladder![1.5 => 10.0, 1.2 => 7.0, 1.0 => 5.0, 0.8 => 2.0];
static MATCH_WIN_RATE: Ladder<'static> = ladder![0.6 => 10.0, 0.55 => 7.0, 0.5 => 5.0, 0.45 => 2.0];
static ROUND_WIN_RATE: Ladder<'static> = ladder![0.55 => 8.0, 0.52 => 5.0, 0.5 => 3.0];
static MVP_RATE: Ladder<'static> = ladder![0.3 => 8.0, 0.2 => 5.0, 0.1 => 2.0];
static FIRST_KILL_RATE: Ladder<'static> = ladder![0.2 => 8.0, 0.15 => 5.0, 0.1 => 2.0];
static ACE_RATE: Ladder<'static> = ladder![0.1 => 6.0, 0.05 => 4.0, 0.0 => 1.0];
static DAMAGE_PER_ROUND: Ladder<'static> = ladder![180.0 => 10.0, 150.0 => 7.0, 120.0 => 4.0];
static OBJECTIVE_RATE: Ladder<'static> = ladder![0.25 => 6.0, 0.15 => 4.0, 0.05 => 2.0];
static RANK_TIER: Ladder<'static> = ladder![24.0 => 10.0, 20.0 => 7.0, 15.0 => 5.0, 10.0 => 3.0];
static PLAYTIME_HOURS: Ladder<'static> =
    ladder![100.0 => 8.0, 50.0 => 5.0, 20.0 => 3.0, 5.0 => 1.0];

/// The ten components of a season score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonComponents {
    pub kd: f64,
    pub match_win_rate: f64,
    pub round_win_rate: f64,
    pub mvp_rate: f64,
    pub first_kill_rate: f64,
    pub ace_rate: f64,
    pub damage_per_round: f64,
    pub objective_rate: f64,
    pub rank_tier: f64,
    pub playtime: f64,
}

impl SeasonComponents {
    pub fn total(&self) -> f64 {
        self.kd
            + self.match_win_rate
            + self.round_win_rate
            + self.mvp_rate
            + self.first_kill_rate
            + self.ace_rate
            + self.damage_per_round
            + self.objective_rate
            + self.rank_tier
            + self.playtime
    }
}

pub fn components(season: &SeasonStat) -> SeasonComponents {
    let matches = season.matches_played as f64;
    let rounds = season.rounds_played as f64;

    SeasonComponents {
        kd: KD.score(kd_ratio(season.kills, season.deaths)),
        match_win_rate: MATCH_WIN_RATE.score(ratio(season.matches_won as f64, matches)),
        round_win_rate: ROUND_WIN_RATE.score(ratio(season.rounds_won as f64, rounds)),
        mvp_rate: MVP_RATE.score(ratio(season.mvps as f64, matches)),
        first_kill_rate: FIRST_KILL_RATE.score(ratio(season.first_kills as f64, rounds)),
        ace_rate: ACE_RATE.score(ratio(season.aces as f64, matches)),
        damage_per_round: DAMAGE_PER_ROUND.score(ratio(season.damage as f64, rounds)),
        objective_rate: OBJECTIVE_RATE.score(ratio(
            season.plants as f64 + season.defuses as f64,
            rounds,
        )),
        rank_tier: RANK_TIER.score(season.rank_tier as f64),
        playtime: PLAYTIME_HOURS.score(season.playtime_millis as f64 / MILLIS_PER_HOUR),
    }
}

pub fn score(season: &SeasonStat) -> f64 {
    let components = components(season);
    let total = components.total();

    tracing::trace!(season = %season.season.id, ?components, "Season score");

    if season.season.is_active {
        total * ACTIVE_MULTIPLIER
    } else {
        total
    }
}
