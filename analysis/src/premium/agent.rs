use super::{clutch_score, consistency_bonus, kd_ratio, win_rate, ACTIVE_SEASON_MULTIPLIER};
use crate::{
    ladder,
    tiers::{ratio, Ladder},
};
use common::{AgentStat, SeasonPerformance};

static KD: Ladder<'static> = ladder![1.5 => 10.0, 1.2 => 7.0, 1.0 => 5.0, 0.8 => 2.0];
static WIN_RATE: Ladder<'static> = ladder![0.6 => 10.0, 0.55 => 7.0, 0.5 => 5.0, 0.45 => 2.0];
/// Ability damage per round.
static ABILITY_IMPACT: Ladder<'static> = ladder![25.0 => 8.0, 15.0 => 5.0, 8.0 => 3.0];
/// Win rate on the agent's best map.
static MAP_WIN_RATE: Ladder<'static> = ladder![0.65 => 5.0, 0.55 => 3.0];

/// Maps need this many matches before they count for the map bonus.
const MIN_MAP_MATCHES: u64 = 3;

fn rounds(season: &SeasonPerformance) -> f64 {
    season.rounds_won as f64 + season.rounds_lost as f64
}

pub fn ability_impact(season: &SeasonPerformance) -> f64 {
    ratio(season.ability_damage as f64, rounds(season))
}

pub fn best_map_win_rate(season: &SeasonPerformance) -> Option<f64> {
    season
        .map_results
        .iter()
        .filter(|m| m.wins as u64 + m.losses as u64 >= MIN_MAP_MATCHES)
        .map(|m| win_rate(m.wins, m.losses))
        .max_by(|a, b| a.total_cmp(b))
}

/// Score of a single season, before the active season multiplier.
pub fn season_score(season: &SeasonPerformance) -> f64 {
    let kd = KD.score(kd_ratio(season.kills, season.deaths));
    let wins = WIN_RATE.score(win_rate(season.matches_won, season.matches_lost));
    let clutch = clutch_score(&season.clutches);
    let ability = ABILITY_IMPACT.score(ability_impact(season));
    let map = best_map_win_rate(season)
        .map(|rate| MAP_WIN_RATE.score(rate))
        .unwrap_or(0.0);

    kd + wins + clutch + ability + map
}

pub fn weighted_season_score(season: &SeasonPerformance) -> f64 {
    let score = season_score(season);
    if season.season.is_active {
        score * ACTIVE_SEASON_MULTIPLIER
    } else {
        score
    }
}

pub fn score(agent: &AgentStat) -> f64 {
    let seasons: f64 = agent.seasons.iter().map(weighted_season_score).sum();
    let consistency = consistency_bonus(agent.seasons.iter().map(|s| {
        (
            kd_ratio(s.kills, s.deaths),
            win_rate(s.matches_won, s.matches_lost),
        )
    }));

    tracing::trace!(agent = %agent.agent_id, seasons, consistency, "Agent score");

    seasons + consistency
}
