#![allow(dead_code)]

use analysis::position::{Callout, CalloutIndex};
use common::{
    AbilityCast, DamageEvent, Economy, KillEvent, Location, MatchTelemetry, Player,
    PlayerLocation, PlayerRoundStat, Round, TeamColor,
};

pub const MAP: &str = "ascent";

pub fn player(puuid: &str, team: TeamColor) -> Player {
    Player {
        puuid: puuid.to_owned(),
        team,
        agent_id: "agent".to_owned(),
    }
}

/// `a`, `b` on Red and `x`, `y`, `z` on Blue.
pub fn players() -> Vec<Player> {
    vec![
        player("a", TeamColor::Red),
        player("b", TeamColor::Red),
        player("x", TeamColor::Blue),
        player("y", TeamColor::Blue),
        player("z", TeamColor::Blue),
    ]
}

pub fn location(x: f64, y: f64) -> Location {
    Location { x, y }
}

pub fn kill(at: u64, killer: &str, victim: &str) -> KillEvent {
    KillEvent {
        time_since_round_start_millis: at,
        killer: killer.to_owned(),
        victim: victim.to_owned(),
        victim_location: location(0.0, 0.0),
        player_locations: Vec::new(),
        assistants: Vec::new(),
        weapon: Some("vandal".to_owned()),
    }
}

pub fn kill_at(at: u64, killer: &str, victim: &str, killer_location: Location) -> KillEvent {
    KillEvent {
        player_locations: vec![PlayerLocation {
            puuid: killer.to_owned(),
            location: killer_location,
        }],
        ..kill(at, killer, victim)
    }
}

pub fn damage(
    receiver: &str,
    amount: u32,
    headshots: u32,
    bodyshots: u32,
    legshots: u32,
) -> DamageEvent {
    DamageEvent {
        receiver: receiver.to_owned(),
        damage: amount,
        headshots,
        bodyshots,
        legshots,
        time_since_round_start_millis: None,
    }
}

pub fn ability(damage: Option<u32>) -> AbilityCast {
    AbilityCast {
        slot: "Ability1".to_owned(),
        damage,
    }
}

pub fn stat(puuid: &str, loadout: u32) -> PlayerRoundStat {
    PlayerRoundStat {
        puuid: puuid.to_owned(),
        kills: Vec::new(),
        damage: Vec::new(),
        economy: Some(Economy {
            loadout_value: loadout,
            weapon: Some("vandal".to_owned()),
            armor: Some("heavy".to_owned()),
            spent: loadout,
            remaining: 0,
        }),
        abilities: Vec::new(),
        ability_charges: Some(4),
        was_penalized: false,
    }
}

pub fn round(round_num: u32, winner: TeamColor, player_stats: Vec<PlayerRoundStat>) -> Round {
    Round {
        round_num,
        winning_team: winner,
        bomb_planter: None,
        bomb_defuser: None,
        plant_site: None,
        player_stats,
    }
}

pub fn telemetry(rounds: Vec<Round>) -> MatchTelemetry {
    MatchTelemetry {
        match_id: "match-1".to_owned(),
        map_id: MAP.to_owned(),
        is_ranked: true,
        rounds,
        players: players(),
        teams: Vec::new(),
    }
}

pub fn callout(super_region: &str, region: &str, x: f64, y: f64) -> Callout {
    Callout {
        region_name: region.to_owned(),
        super_region_name: super_region.to_owned(),
        location: location(x, y),
    }
}

pub fn callouts() -> CalloutIndex {
    let mut index = CalloutIndex::new();
    index.insert(
        MAP,
        vec![
            callout("A", "Site", 100.0, 100.0),
            callout("B", "Site", -100.0, -100.0),
            callout("Mid", "Courtyard", 0.0, 0.0),
            callout("Attacker Side", "Spawn", 0.0, -300.0),
        ],
    );
    index
}
