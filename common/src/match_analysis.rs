use crate::TeamColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RoundOutcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PositionType {
    Entry,
    Aggressive,
    Anchor,
    Control,
    Lurk,
    Forward,
    Balanced,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CombatStats {
    pub kills: u32,
    /// A player can only die once per round, so this is either 0 or 1.
    pub deaths: u32,
    pub assists: u32,
    pub damage_dealt: u32,
    pub headshot_percentage: f64,
    /// The player's own death was avenged by a teammate.
    pub was_traded: bool,
    /// The player avenged a teammate.
    pub got_trade_kill: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EconomyStats {
    pub loadout_value: u32,
    /// Mean loadout of the opposing participants.
    pub enemy_loadout_value: f64,
    pub credits_spent: u32,
    pub weapon: Option<String>,
    pub armor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PositioningStats {
    pub site: String,
    pub region: Option<String>,
    pub position_type: PositionType,
    pub first_contact: bool,
    pub time_to_first_contact_millis: u64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UtilityStats {
    pub abilities_used: u32,
    pub total_abilities: u32,
    pub utility_damage: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundPerformance {
    pub round_num: u32,
    pub outcome: RoundOutcome,
    pub impact_score: u8,
    pub combat: CombatStats,
    pub economy: EconomyStats,
    pub positioning: PositioningStats,
    pub utility: UtilityStats,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamStat {
    pub team: TeamColor,
    pub first_kills: u32,
    pub thrifty_wins: u32,
    pub post_plant_wins: u32,
    pub post_plant_losses: u32,
    pub clutch_wins: u32,
}

impl TeamStat {
    pub fn new(team: TeamColor) -> Self {
        Self {
            team,
            first_kills: 0,
            thrifty_wins: 0,
            post_plant_wins: 0,
            post_plant_losses: 0,
            clutch_wins: 0,
        }
    }
}
