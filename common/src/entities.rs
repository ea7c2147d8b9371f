//! Historical, season-bucketed statistics of the entities that can be marked
//! as premium.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeasonDescriptor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Clutch wins bucketed by how many opponents were left (1vN).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClutchCounts {
    pub v1: u32,
    pub v2: u32,
    pub v3: u32,
    pub v4: u32,
    pub v5: u32,
}

impl ClutchCounts {
    pub fn total(&self) -> u64 {
        [self.v1, self.v2, self.v3, self.v4, self.v5]
            .iter()
            .map(|c| *c as u64)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MapResult {
    pub map_id: String,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeasonPerformance {
    pub season: SeasonDescriptor,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub matches_won: u32,
    #[serde(default)]
    pub matches_lost: u32,
    #[serde(default)]
    pub rounds_won: u32,
    #[serde(default)]
    pub rounds_lost: u32,
    #[serde(default)]
    pub playtime_millis: u64,
    #[serde(default)]
    pub plants: u32,
    #[serde(default)]
    pub defuses: u32,
    #[serde(default)]
    pub clutches: ClutchCounts,
    #[serde(default)]
    pub ability_casts: u32,
    #[serde(default)]
    pub ability_damage: u32,
    #[serde(default)]
    pub map_results: Vec<MapResult>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MapSeasonPerformance {
    pub season: SeasonDescriptor,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub matches_won: u32,
    #[serde(default)]
    pub matches_lost: u32,
    #[serde(default)]
    pub rounds_won: u32,
    #[serde(default)]
    pub rounds_lost: u32,
    #[serde(default)]
    pub attack_rounds_won: u32,
    #[serde(default)]
    pub attack_rounds_lost: u32,
    #[serde(default)]
    pub defense_rounds_won: u32,
    #[serde(default)]
    pub defense_rounds_lost: u32,
    #[serde(default)]
    pub plants: u32,
    #[serde(default)]
    pub defuses: u32,
    #[serde(default)]
    pub clutches: ClutchCounts,
    #[serde(default)]
    pub ability_damage: u32,
    #[serde(default)]
    pub playtime_millis: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponCategory {
    Sidearm,
    Smg,
    Shotgun,
    Rifle,
    Sniper,
    Heavy,
    Melee,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeaponSeasonPerformance {
    pub season: SeasonDescriptor,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub headshots: u32,
    #[serde(default)]
    pub bodyshots: u32,
    #[serde(default)]
    pub legshots: u32,
    #[serde(default)]
    pub damage: u64,
    #[serde(default)]
    pub rounds_played: u32,
    #[serde(default)]
    pub first_kills: u32,
    #[serde(default)]
    pub aces: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AgentStat {
    pub agent_id: String,
    pub name: String,
    #[serde(default)]
    pub seasons: Vec<SeasonPerformance>,
    #[serde(default)]
    pub is_premium_stats: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MapStat {
    pub map_id: String,
    pub name: String,
    #[serde(default)]
    pub seasons: Vec<MapSeasonPerformance>,
    #[serde(default)]
    pub is_premium_stats: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeaponStat {
    pub weapon_id: String,
    pub name: String,
    pub category: WeaponCategory,
    #[serde(default)]
    pub seasons: Vec<WeaponSeasonPerformance>,
    #[serde(default)]
    pub is_premium_stats: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeasonStat {
    pub season: SeasonDescriptor,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub matches_won: u32,
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default)]
    pub rounds_won: u32,
    #[serde(default)]
    pub rounds_played: u32,
    #[serde(default)]
    pub mvps: u32,
    #[serde(default)]
    pub first_kills: u32,
    #[serde(default)]
    pub aces: u32,
    #[serde(default)]
    pub damage: u64,
    #[serde(default)]
    pub plants: u32,
    #[serde(default)]
    pub defuses: u32,
    #[serde(default)]
    pub rank_tier: u32,
    #[serde(default)]
    pub playtime_millis: u64,
    #[serde(default)]
    pub is_premium_stats: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MultiKills {
    pub double: u32,
    pub triple: u32,
    pub quadra: u32,
    pub penta: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchStat {
    pub match_id: String,
    #[serde(default)]
    pub is_ranked: bool,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub headshots: u32,
    #[serde(default)]
    pub bodyshots: u32,
    #[serde(default)]
    pub legshots: u32,
    /// Total combat score.
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub rounds_played: u32,
    /// Combat score earned in each round.
    #[serde(default)]
    pub round_scores: Vec<u32>,
    #[serde(default)]
    pub clutches: u32,
    #[serde(default)]
    pub multi_kills: MultiKills,
    /// Kills of the whole team, used for the kill share.
    #[serde(default)]
    pub team_kills: u32,
    #[serde(default)]
    pub is_premium_stats: bool,
}

/// An entity carrying the premium flag.
pub trait ScoredEntity {
    fn is_premium_stats(&self) -> bool;

    fn set_premium_stats(&mut self, premium: bool);
}

macro_rules! scored_entity {
    ($($ty:ty),*) => {
        $(
            impl ScoredEntity for $ty {
                fn is_premium_stats(&self) -> bool {
                    self.is_premium_stats
                }

                fn set_premium_stats(&mut self, premium: bool) {
                    self.is_premium_stats = premium;
                }
            }
        )*
    };
}

scored_entity!(AgentStat, MapStat, WeaponStat, SeasonStat, MatchStat);
