use super::{clutch_score, consistency_bonus, kd_ratio, win_rate, ACTIVE_SEASON_MULTIPLIER};
use crate::{
    ladder,
    tiers::{ratio, Ladder},
};
use common::{MapSeasonPerformance, MapStat};

static KD: Ladder<'static> = ladder![1.5 => 10.0, 1.2 => 7.0, 1.0 => 5.0, 0.8 => 2.0];
static WIN_RATE: Ladder<'static> = ladder![0.6 => 10.0, 0.55 => 7.0, 0.5 => 5.0, 0.45 => 2.0];
/// Ability damage per round.
static ABILITY_IMPACT: Ladder<'static> = ladder![25.0 => 8.0, 15.0 => 5.0, 8.0 => 3.0];
/// Plants and defuses per round.
static OBJECTIVES: Ladder<'static> = ladder![0.3 => 4.0, 0.15 => 2.0];

const BALANCED_SIDE_WIN_RATE: f64 = 0.55;
const STRONG_SIDE_WIN_RATE: f64 = 0.6;

fn rounds(season: &MapSeasonPerformance) -> f64 {
    season.rounds_won as f64 + season.rounds_lost as f64
}

pub fn attack_win_rate(season: &MapSeasonPerformance) -> f64 {
    win_rate(season.attack_rounds_won, season.attack_rounds_lost)
}

pub fn defense_win_rate(season: &MapSeasonPerformance) -> f64 {
    win_rate(season.defense_rounds_won, season.defense_rounds_lost)
}

/// Rewards winning both halves of the map, or dominating one of them.
pub fn side_bonus(season: &MapSeasonPerformance) -> f64 {
    let attack = attack_win_rate(season);
    let defense = defense_win_rate(season);

    if attack > BALANCED_SIDE_WIN_RATE && defense > BALANCED_SIDE_WIN_RATE {
        6.0
    } else if attack.max(defense) > STRONG_SIDE_WIN_RATE {
        3.0
    } else {
        0.0
    }
}

/// Score of a single season, before the active season multiplier.
pub fn season_score(season: &MapSeasonPerformance) -> f64 {
    let rounds = rounds(season);

    let kd = KD.score(kd_ratio(season.kills, season.deaths));
    let wins = WIN_RATE.score(win_rate(season.matches_won, season.matches_lost));
    let clutch = clutch_score(&season.clutches);
    let ability = ABILITY_IMPACT.score(ratio(season.ability_damage as f64, rounds));
    let objectives = OBJECTIVES.score(ratio(
        season.plants as f64 + season.defuses as f64,
        rounds,
    ));

    kd + wins + clutch + ability + side_bonus(season) + objectives
}

pub fn weighted_season_score(season: &MapSeasonPerformance) -> f64 {
    let score = season_score(season);
    if season.season.is_active {
        score * ACTIVE_SEASON_MULTIPLIER
    } else {
        score
    }
}

pub fn score(map: &MapStat) -> f64 {
    let seasons: f64 = map.seasons.iter().map(weighted_season_score).sum();
    let consistency = consistency_bonus(map.seasons.iter().map(|s| {
        (
            kd_ratio(s.kills, s.deaths),
            win_rate(s.matches_won, s.matches_lost),
        )
    }));

    tracing::trace!(map = %map.map_id, seasons, consistency, "Map score");

    seasons + consistency
}
