//! Raw, already-terminated match telemetry as handed over by the storage layer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TeamColor {
    Red,
    Blue,
}

impl TeamColor {
    pub fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn distance(&self, other: &Location) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerLocation {
    pub puuid: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    pub puuid: String,
    pub team: TeamColor,
    pub agent_id: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Team {
    pub team_id: TeamColor,
    #[serde(default)]
    pub rounds_won: u32,
    #[serde(default)]
    pub has_won: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KillEvent {
    pub time_since_round_start_millis: u64,
    pub killer: String,
    pub victim: String,
    pub victim_location: Location,
    /// Where every living player stood when the kill happened.
    #[serde(default)]
    pub player_locations: Vec<PlayerLocation>,
    #[serde(default)]
    pub assistants: Vec<String>,
    #[serde(default)]
    pub weapon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DamageEvent {
    pub receiver: String,
    pub damage: u32,
    #[serde(default)]
    pub headshots: u32,
    #[serde(default)]
    pub bodyshots: u32,
    #[serde(default)]
    pub legshots: u32,
    /// Untimed events are never considered for first contact.
    #[serde(default)]
    pub time_since_round_start_millis: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Economy {
    pub loadout_value: u32,
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub armor: Option<String>,
    #[serde(default)]
    pub spent: u32,
    #[serde(default)]
    pub remaining: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AbilityCast {
    pub slot: String,
    #[serde(default)]
    pub damage: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRoundStat {
    pub puuid: String,
    /// Kills made by this player.
    #[serde(default)]
    pub kills: Vec<KillEvent>,
    /// Damage dealt by this player.
    #[serde(default)]
    pub damage: Vec<DamageEvent>,
    #[serde(default)]
    pub economy: Option<Economy>,
    #[serde(default)]
    pub abilities: Vec<AbilityCast>,
    /// Ability charges available this round, if the source reports them.
    #[serde(default)]
    pub ability_charges: Option<u32>,
    #[serde(default)]
    pub was_penalized: bool,
}

impl PlayerRoundStat {
    pub fn loadout_value(&self) -> u32 {
        self.economy.as_ref().map(|e| e.loadout_value).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    pub round_num: u32,
    pub winning_team: TeamColor,
    #[serde(default)]
    pub bomb_planter: Option<String>,
    #[serde(default)]
    pub bomb_defuser: Option<String>,
    #[serde(default)]
    pub plant_site: Option<String>,
    #[serde(default)]
    pub player_stats: Vec<PlayerRoundStat>,
}

/// The stat record of `puuid` among the records of one round.
pub fn stats_for<'s>(stats: &'s [PlayerRoundStat], puuid: &str) -> Option<&'s PlayerRoundStat> {
    stats.iter().find(|s| s.puuid == puuid)
}

/// Every kill of the given records, in participant order.
pub fn kill_events(stats: &[PlayerRoundStat]) -> impl Iterator<Item = &KillEvent> {
    stats.iter().flat_map(|s| s.kills.iter())
}

pub fn team_of(players: &[Player], puuid: &str) -> Option<TeamColor> {
    players.iter().find(|p| p.puuid == puuid).map(|p| p.team)
}

impl Round {
    pub fn stats_for(&self, puuid: &str) -> Option<&PlayerRoundStat> {
        stats_for(&self.player_stats, puuid)
    }

    pub fn kill_events(&self) -> impl Iterator<Item = &KillEvent> {
        kill_events(&self.player_stats)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchTelemetry {
    pub match_id: String,
    pub map_id: String,
    #[serde(default)]
    pub is_ranked: bool,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("match {match_id} has no rounds")]
    NoRounds { match_id: String },
    #[error("expected round {expected} but found round {found}")]
    NonContiguousRound { expected: u32, found: u32 },
    #[error("round {round} references unknown player {puuid}")]
    UnknownPlayer { round: u32, puuid: String },
}

impl MatchTelemetry {
    pub fn player(&self, puuid: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.puuid == puuid)
    }

    pub fn team_of(&self, puuid: &str) -> Option<TeamColor> {
        team_of(&self.players, puuid)
    }

    /// Checks the shape invariants once at the ingestion boundary, so the
    /// calculators do not have to.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rounds.is_empty() {
            return Err(ValidationError::NoRounds {
                match_id: self.match_id.clone(),
            });
        }

        for (expected, round) in (1..).zip(self.rounds.iter()) {
            if round.round_num != expected {
                return Err(ValidationError::NonContiguousRound {
                    expected,
                    found: round.round_num,
                });
            }

            if let Some(unknown) = round
                .player_stats
                .iter()
                .find(|s| self.player(&s.puuid).is_none())
            {
                return Err(ValidationError::UnknownPlayer {
                    round: round.round_num,
                    puuid: unknown.puuid.clone(),
                });
            }
        }

        Ok(())
    }
}
