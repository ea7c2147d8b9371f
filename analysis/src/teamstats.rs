//! Team level tactical statistics for a whole match.

use common::{team_of, MatchTelemetry, Player, PlayerRoundStat, Round, TeamColor, TeamStat};

const THRIFTY_RATIO: f64 = 0.6;

fn members<'r>(
    round: &'r Round,
    players: &'r [Player],
    team: TeamColor,
) -> impl Iterator<Item = &'r PlayerRoundStat> {
    round
        .player_stats
        .iter()
        .filter(move |s| team_of(players, &s.puuid) == Some(team))
}

/// A participant is alive at the end of the round if they were not penalised
/// and no kill event names them as the victim.
pub fn is_alive(round: &Round, stat: &PlayerRoundStat) -> bool {
    !stat.was_penalized && !round.kill_events().any(|k| k.victim == stat.puuid)
}

pub fn alive_count(round: &Round, players: &[Player], team: TeamColor) -> usize {
    members(round, players, team)
        .filter(|s| is_alive(round, s))
        .count()
}

/// Team of whoever got the earliest kill of the round.
pub fn first_kill_team(round: &Round, players: &[Player]) -> Option<TeamColor> {
    let mut first = None;
    for kill in round.kill_events() {
        match first {
            Some((_, at)) if kill.time_since_round_start_millis >= at => {}
            _ => first = Some((kill, kill.time_since_round_start_millis)),
        }
    }

    first.and_then(|(kill, _)| team_of(players, &kill.killer))
}

/// Sum of the loadout values, missing economy counts as 0.
pub fn team_loadout(round: &Round, players: &[Player], team: TeamColor) -> u64 {
    members(round, players, team)
        .map(|s| s.loadout_value() as u64)
        .sum()
}

/// Mean loadout value of the team's participants, `None` if the team has no
/// stat records in the round.
pub fn average_loadout(round: &Round, players: &[Player], team: TeamColor) -> Option<f64> {
    let count = members(round, players, team).count();
    if count == 0 {
        return None;
    }

    Some(team_loadout(round, players, team) as f64 / count as f64)
}

/// The winners' average loadout was below 60% of the losers'. Rounds where
/// either team has no participants are never thrifty.
pub fn is_thrifty(round: &Round, players: &[Player]) -> bool {
    let winner = round.winning_team;
    match (
        average_loadout(round, players, winner),
        average_loadout(round, players, winner.opponent()),
    ) {
        (Some(winners), Some(losers)) => winners < losers * THRIFTY_RATIO,
        _ => false,
    }
}

fn stat_for(stats: &mut [TeamStat; 2], team: TeamColor) -> &mut TeamStat {
    if stats[0].team == team {
        &mut stats[0]
    } else {
        &mut stats[1]
    }
}

fn process_round(round: &Round, players: &[Player], stats: &mut [TeamStat; 2]) {
    if let Some(team) = first_kill_team(round, players) {
        stat_for(stats, team).first_kills += 1;
    }

    if is_thrifty(round, players) {
        stat_for(stats, round.winning_team).thrifty_wins += 1;
    }

    if let Some(planting_team) = round
        .bomb_planter
        .as_deref()
        .and_then(|planter| team_of(players, planter))
    {
        let planters = stat_for(stats, planting_team);
        if round.winning_team == planting_team {
            planters.post_plant_wins += 1;
        } else {
            planters.post_plant_losses += 1;
        }
    }

    if alive_count(round, players, round.winning_team) == 1 {
        stat_for(stats, round.winning_team).clutch_wins += 1;
    }
}

/// Returns the tracked player's team first and the enemy team second.
#[tracing::instrument(name = "TeamStats", skip(telemetry), fields(match_id = %telemetry.match_id))]
pub fn generate(telemetry: &MatchTelemetry, puuid: &str) -> [TeamStat; 2] {
    let own_team = match telemetry.team_of(puuid) {
        Some(t) => t,
        None => {
            tracing::warn!("Player {} is not part of the match, assuming Red", puuid);
            TeamColor::Red
        }
    };

    let mut stats = [TeamStat::new(own_team), TeamStat::new(own_team.opponent())];
    for round in telemetry.rounds.iter() {
        let _tracing_guard = tracing::trace_span!("Round", round = round.round_num).entered();
        process_round(round, &telemetry.players, &mut stats);
    }

    tracing::debug!(?stats, "Team stats");

    stats
}
