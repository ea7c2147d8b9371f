use common::PlayerRoundStat;

/// Every timed kill or damage event of the round as `(owner, millis)`, in
/// participant order with kills before damage.
fn contact_events(stats: &[PlayerRoundStat]) -> impl Iterator<Item = (&str, u64)> {
    stats.iter().flat_map(|s| {
        let kills = s
            .kills
            .iter()
            .map(|k| (k.killer.as_str(), k.time_since_round_start_millis));
        let damage = s
            .damage
            .iter()
            .filter_map(move |d| Some((s.puuid.as_str(), d.time_since_round_start_millis?)));
        kills.chain(damage)
    })
}

/// Owner of the earliest event, the first one seen wins ties.
pub fn first_contact_owner(stats: &[PlayerRoundStat]) -> Option<&str> {
    let mut earliest: Option<(&str, u64)> = None;
    for (owner, at) in contact_events(stats) {
        match earliest {
            Some((_, best)) if at >= best => {}
            _ => earliest = Some((owner, at)),
        }
    }
    earliest.map(|(owner, _)| owner)
}

pub fn first_contact(stats: &[PlayerRoundStat], puuid: &str) -> bool {
    first_contact_owner(stats) == Some(puuid)
}

/// The player's own earliest event, or 0 if they never made contact.
pub fn time_to_first_contact(stats: &[PlayerRoundStat], puuid: &str) -> u64 {
    contact_events(stats)
        .filter(|(owner, _)| *owner == puuid)
        .map(|(_, at)| at)
        .min()
        .unwrap_or(0)
}
