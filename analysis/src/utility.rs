use common::{stats_for, PlayerRoundStat};

pub fn abilities_used(stats: &[PlayerRoundStat], puuid: &str) -> u32 {
    stats_for(stats, puuid)
        .map(|s| s.abilities.len() as u32)
        .unwrap_or(0)
}

pub fn utility_damage(stats: &[PlayerRoundStat], puuid: &str) -> u32 {
    stats_for(stats, puuid)
        .map(|s| {
            s.abilities
                .iter()
                .filter_map(|a| a.damage)
                .fold(0u32, |total, d| total.saturating_add(d))
        })
        .unwrap_or(0)
}

/// Ability charges available to the player, falling back to `default` when
/// the round does not report them.
pub fn total_abilities(stats: &[PlayerRoundStat], puuid: &str, default: u32) -> u32 {
    stats_for(stats, puuid)
        .and_then(|s| s.ability_charges)
        .unwrap_or(default)
}
