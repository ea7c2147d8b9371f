use crate::{combat, contact, impact, improvement, position, utility};
use common::{
    team_of, CombatStats, EconomyStats, Location, MatchTelemetry, Player, PositioningStats, Round,
    RoundOutcome, RoundPerformance, TeamColor, UtilityStats,
};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long after a teammate's death a kill still counts as a trade.
    pub trade_window_millis: u64,
    /// Ability charges assumed when a round does not report them.
    pub default_ability_charges: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trade_window_millis: 5000,
            default_ability_charges: 4,
        }
    }
}

/// Everything known about one player in one round, before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundStats {
    pub round_num: u32,
    pub outcome: RoundOutcome,
    pub combat: CombatStats,
    pub economy: EconomyStats,
    pub positioning: PositioningStats,
    pub utility: UtilityStats,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RoundError {
    #[error("round {round} has no stats for player {puuid}")]
    MissingPlayerStats { round: u32, puuid: String },
    #[error("player {puuid} is not part of the match")]
    UnknownPlayer { puuid: String },
}

/// Where the player stood in the round, taken from their own kill or, failing
/// that, from their death.
pub fn player_location<'r>(round: &'r Round, puuid: &str) -> Option<&'r Location> {
    let on_kill = round
        .kill_events()
        .filter(|k| k.killer == puuid)
        .find_map(|k| {
            k.player_locations
                .iter()
                .find(|l| l.puuid == puuid)
                .map(|l| &l.location)
        });

    on_kill.or_else(|| {
        round
            .kill_events()
            .find(|k| k.victim == puuid)
            .map(|k| &k.victim_location)
    })
}

/// Mean loadout value of every participant not on `team`, 0 if there are
/// none.
pub fn enemy_loadout(round: &Round, players: &[Player], team: TeamColor) -> f64 {
    let (total, count) = round
        .player_stats
        .iter()
        .filter(|s| matches!(team_of(players, &s.puuid), Some(t) if t != team))
        .fold((0u64, 0u64), |(total, count), s| {
            (total + s.loadout_value() as u64, count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    total as f64 / count as f64
}

pub fn round_stats(
    telemetry: &MatchTelemetry,
    round: &Round,
    puuid: &str,
    classifier: &position::Classifier<'_>,
    config: &Config,
) -> Result<RoundStats, RoundError> {
    let team = telemetry
        .team_of(puuid)
        .ok_or_else(|| RoundError::UnknownPlayer {
            puuid: puuid.to_owned(),
        })?;
    let own = round
        .stats_for(puuid)
        .ok_or_else(|| RoundError::MissingPlayerStats {
            round: round.round_num,
            puuid: puuid.to_owned(),
        })?;
    let stats = round.player_stats.as_slice();

    let combat = CombatStats {
        kills: combat::kills(stats, puuid),
        deaths: combat::deaths(stats, puuid),
        assists: combat::assists(stats, puuid),
        damage_dealt: combat::damage_dealt(stats, puuid),
        headshot_percentage: combat::headshot_percentage(stats, puuid),
        was_traded: combat::was_traded(stats, puuid),
        got_trade_kill: combat::got_trade_kill(
            stats,
            &telemetry.players,
            puuid,
            config.trade_window_millis,
        ),
    };

    let economy = EconomyStats {
        loadout_value: own.loadout_value(),
        enemy_loadout_value: enemy_loadout(round, &telemetry.players, team),
        credits_spent: own.economy.as_ref().map(|e| e.spent).unwrap_or(0),
        weapon: own.economy.as_ref().and_then(|e| e.weapon.clone()),
        armor: own.economy.as_ref().and_then(|e| e.armor.clone()),
    };

    let location = player_location(round, puuid);
    let position = classifier.classify(&telemetry.map_id, location, round.round_num, team);
    let positioning = PositioningStats {
        site: position.site,
        region: position.region,
        position_type: position.position_type,
        first_contact: contact::first_contact(stats, puuid),
        time_to_first_contact_millis: contact::time_to_first_contact(stats, puuid),
    };

    let utility = UtilityStats {
        abilities_used: utility::abilities_used(stats, puuid),
        total_abilities: utility::total_abilities(stats, puuid, config.default_ability_charges),
        utility_damage: utility::utility_damage(stats, puuid),
    };

    let outcome = if round.winning_team == team {
        RoundOutcome::Won
    } else {
        RoundOutcome::Lost
    };

    Ok(RoundStats {
        round_num: round.round_num,
        outcome,
        combat,
        economy,
        positioning,
        utility,
    })
}

pub fn analyse_round(
    telemetry: &MatchTelemetry,
    round: &Round,
    puuid: &str,
    classifier: &position::Classifier<'_>,
    config: &Config,
) -> Result<RoundPerformance, RoundError> {
    let stats = round_stats(telemetry, round, puuid, classifier, config)?;

    let impact_score = impact::calculate(&stats);
    let improvements = improvement::suggest(&stats);

    Ok(RoundPerformance {
        round_num: stats.round_num,
        outcome: stats.outcome,
        impact_score,
        combat: stats.combat,
        economy: stats.economy,
        positioning: stats.positioning,
        utility: stats.utility,
        improvements,
    })
}

/// One [`RoundPerformance`] per round the player took part in, in round order.
///
/// Rounds that cannot be analysed are logged and skipped, the rest of the
/// match is still returned.
#[tracing::instrument(
    name = "PerRound",
    skip(telemetry, callouts, config),
    fields(match_id = %telemetry.match_id)
)]
pub fn generate(
    telemetry: &MatchTelemetry,
    puuid: &str,
    callouts: &position::CalloutIndex,
    config: &Config,
) -> Vec<RoundPerformance> {
    if telemetry.player(puuid).is_none() {
        tracing::warn!("Player {} is not part of the match", puuid);
        return Vec::new();
    }

    let classifier = position::Classifier::new(callouts);

    let mut performances = Vec::with_capacity(telemetry.rounds.len());
    for round in telemetry.rounds.iter() {
        let _tracing_guard = tracing::debug_span!("Round", round = round.round_num).entered();

        match analyse_round(telemetry, round, puuid, &classifier, config) {
            Ok(performance) => performances.push(performance),
            Err(e) => {
                tracing::warn!("Skipping round {}: {}", round.round_num, e);
            }
        }
    }

    tracing::debug!("Analysed {} of {} rounds", performances.len(), telemetry.rounds.len());

    performances
}
