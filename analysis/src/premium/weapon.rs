//! Weapon scores. Seasons are summed up first and the totals are scored once.

use crate::{
    ladder,
    tiers::{ratio, tier, Ladder},
};
use common::{WeaponCategory, WeaponSeasonPerformance, WeaponStat};

static KILLS_PER_ROUND: Ladder<'static> = ladder![1.0 => 12.0, 0.8 => 8.0, 0.6 => 5.0, 0.4 => 2.0];
static DAMAGE_PER_ROUND: Ladder<'static> = ladder![160.0 => 10.0, 130.0 => 7.0, 100.0 => 4.0];
static FIRST_KILL_RATE: Ladder<'static> = ladder![0.2 => 8.0, 0.12 => 5.0, 0.06 => 2.0];
static ACES: Ladder<'static> = ladder![5.0 => 8.0, 2.0 => 5.0, 0.0 => 3.0];

/// Rounds played needed for the top volume tier. Pistols are bought far more
/// often, so they get half of it.
const VOLUME_BASELINE: f64 = 500.0;
const SIDEARM_VOLUME_BASELINE: f64 = 250.0;

const SHOT_DISTRIBUTION_CAP: f64 = 10.0;

/// Headshot percentage that counts as exceptional for this kind of weapon.
pub fn exceptional_headshot_percentage(category: WeaponCategory) -> f64 {
    match category {
        WeaponCategory::Sniper => 60.0,
        WeaponCategory::Shotgun => 20.0,
        WeaponCategory::Smg => 25.0,
        _ => 30.0,
    }
}

pub fn headshot_score(category: WeaponCategory, headshot_percentage: f64) -> f64 {
    let exceptional = exceptional_headshot_percentage(category);
    let tiers = [
        tier(exceptional, 25.0),
        tier(exceptional * 0.8, 18.0),
        tier(exceptional * 0.6, 12.0),
        tier(exceptional * 0.4, 6.0),
    ];
    Ladder::new(&tiers).score(headshot_percentage)
}

pub fn volume_score(category: WeaponCategory, rounds_played: u64) -> f64 {
    let baseline = match category {
        WeaponCategory::Sidearm => SIDEARM_VOLUME_BASELINE,
        _ => VOLUME_BASELINE,
    };
    let tiers = [
        tier(baseline, 10.0),
        tier(baseline * 0.4, 6.0),
        tier(baseline * 0.2, 3.0),
    ];
    Ladder::new(&tiers).score(rounds_played as f64)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotDistribution {
    pub head: f64,
    pub body: f64,
    pub leg: f64,
}

impl ShotDistribution {
    pub fn new(headshots: u64, bodyshots: u64, legshots: u64) -> Self {
        let total = headshots as f64 + bodyshots as f64 + legshots as f64;
        Self {
            head: ratio(headshots as f64, total),
            body: ratio(bodyshots as f64, total),
            leg: ratio(legshots as f64, total),
        }
    }

    pub fn headshot_percentage(&self) -> f64 {
        self.head * 100.0
    }
}

/// Snipers want heads and no legs, shotguns want bodies, rifles and SMGs a
/// healthy balance around 30% headshots.
pub fn shot_distribution_bonus(category: WeaponCategory, shots: &ShotDistribution) -> f64 {
    let bonus = match category {
        WeaponCategory::Sniper => shots.head * 20.0 - shots.leg * 10.0,
        WeaponCategory::Shotgun => shots.body * 10.0,
        WeaponCategory::Rifle | WeaponCategory::Smg => {
            SHOT_DISTRIBUTION_CAP - (shots.head - 0.3).abs() * 25.0 - shots.leg * 20.0
        }
        _ => 0.0,
    };

    bonus.clamp(0.0, SHOT_DISTRIBUTION_CAP)
}

/// All seasons of a weapon summed up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeaponTotals {
    pub kills: u64,
    pub headshots: u64,
    pub bodyshots: u64,
    pub legshots: u64,
    pub damage: u64,
    pub rounds_played: u64,
    pub first_kills: u64,
    pub aces: u64,
}

impl<'s> FromIterator<&'s WeaponSeasonPerformance> for WeaponTotals {
    fn from_iter<T: IntoIterator<Item = &'s WeaponSeasonPerformance>>(iter: T) -> Self {
        iter.into_iter().fold(Self::default(), |mut totals, s| {
            totals.kills = totals.kills.saturating_add(s.kills as u64);
            totals.headshots = totals.headshots.saturating_add(s.headshots as u64);
            totals.bodyshots = totals.bodyshots.saturating_add(s.bodyshots as u64);
            totals.legshots = totals.legshots.saturating_add(s.legshots as u64);
            totals.damage = totals.damage.saturating_add(s.damage);
            totals.rounds_played = totals.rounds_played.saturating_add(s.rounds_played as u64);
            totals.first_kills = totals.first_kills.saturating_add(s.first_kills as u64);
            totals.aces = totals.aces.saturating_add(s.aces as u64);
            totals
        })
    }
}

pub fn score_totals(category: WeaponCategory, totals: &WeaponTotals) -> f64 {
    let rounds = totals.rounds_played as f64;
    let shots = ShotDistribution::new(totals.headshots, totals.bodyshots, totals.legshots);

    headshot_score(category, shots.headshot_percentage())
        + KILLS_PER_ROUND.score(ratio(totals.kills as f64, rounds))
        + DAMAGE_PER_ROUND.score(ratio(totals.damage as f64, rounds))
        + FIRST_KILL_RATE.score(ratio(totals.first_kills as f64, rounds))
        + volume_score(category, totals.rounds_played)
        + ACES.score(totals.aces as f64)
        + shot_distribution_bonus(category, &shots)
}

pub fn score(weapon: &WeaponStat) -> f64 {
    let totals: WeaponTotals = weapon.seasons.iter().collect();
    let score = score_totals(weapon.category, &totals);

    tracing::trace!(weapon = %weapon.weapon_id, score, "Weapon score");

    score
}
