//! Per-round combat facts for a single player.
//!
//! Everything here works on the stat records of one round and treats missing
//! collections as empty.

use common::{kill_events, stats_for, team_of, KillEvent, Player, PlayerRoundStat};

pub fn kills(stats: &[PlayerRoundStat], puuid: &str) -> u32 {
    kill_events(stats)
        .filter(|k| k.killer == puuid && k.victim != puuid)
        .count() as u32
}

/// Either 0 or 1, a player cannot die twice in one round.
pub fn deaths(stats: &[PlayerRoundStat], puuid: &str) -> u32 {
    kill_events(stats).any(|k| k.victim == puuid) as u32
}

pub fn assists(stats: &[PlayerRoundStat], puuid: &str) -> u32 {
    kill_events(stats)
        .filter(|k| k.assistants.iter().any(|a| a == puuid))
        .count() as u32
}

pub fn damage_dealt(stats: &[PlayerRoundStat], puuid: &str) -> u32 {
    stats_for(stats, puuid)
        .map(|s| s.damage.iter().fold(0u32, |total, d| total.saturating_add(d.damage)))
        .unwrap_or(0)
}

/// Share of landed shots that were headshots, in percent.
pub fn headshot_percentage(stats: &[PlayerRoundStat], puuid: &str) -> f64 {
    let (head, body, leg) = stats_for(stats, puuid)
        .map(|s| {
            s.damage.iter().fold((0u64, 0u64, 0u64), |(h, b, l), d| {
                (
                    h + d.headshots as u64,
                    b + d.bodyshots as u64,
                    l + d.legshots as u64,
                )
            })
        })
        .unwrap_or((0, 0, 0));

    let total = head + body + leg;
    if total == 0 {
        return 0.0;
    }

    head as f64 / total as f64 * 100.0
}

pub fn killer_of<'s>(stats: &'s [PlayerRoundStat], puuid: &str) -> Option<&'s KillEvent> {
    kill_events(stats).find(|k| k.victim == puuid)
}

/// The player's killer was killed as well in the same round.
pub fn was_traded(stats: &[PlayerRoundStat], puuid: &str) -> bool {
    let killer = match killer_of(stats, puuid) {
        Some(k) if k.killer != puuid => k.killer.as_str(),
        _ => return false,
    };

    kill_events(stats).any(|k| k.victim == killer)
}

/// One of the player's kills landed within `window_millis` after (never
/// before) the death of a teammate.
pub fn got_trade_kill(
    stats: &[PlayerRoundStat],
    players: &[Player],
    puuid: &str,
    window_millis: u64,
) -> bool {
    let team = match team_of(players, puuid) {
        Some(t) => t,
        None => return false,
    };

    let teammate_deaths: Vec<u64> = kill_events(stats)
        .filter(|k| k.victim != puuid && team_of(players, &k.victim) == Some(team))
        .map(|k| k.time_since_round_start_millis)
        .collect();

    kill_events(stats)
        .filter(|k| k.killer == puuid && k.victim != puuid)
        .any(|kill| {
            let at = kill.time_since_round_start_millis;
            teammate_deaths
                .iter()
                .any(|died| at >= *died && at - died <= window_millis)
        })
}
