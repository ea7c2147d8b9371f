//! Selects which entities of a collection are premium.
//!
//! The selection only depends on the scores, never on the current flags, so
//! running it again on an unchanged collection gives the same result.

use common::{AgentStat, MapStat, MatchStat, ScoredEntity, SeasonStat, WeaponStat};

pub const RANKED_PREMIUM_SCORE: f64 = 75.0;
pub const UNRANKED_PREMIUM_SCORE: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PremiumPolicy {
    /// Share of the collection that is marked premium.
    pub top_percentage: f64,
    /// Marked premium even if the share rounds to fewer.
    pub min_count: usize,
}

impl Default for PremiumPolicy {
    fn default() -> Self {
        Self {
            top_percentage: 1.0 / 3.0,
            min_count: 1,
        }
    }
}

impl PremiumPolicy {
    pub fn matches() -> Self {
        Self {
            top_percentage: 0.2,
            min_count: 1,
        }
    }

    /// `max(min_count, ceil(len * top_percentage))`, never more than `len`.
    pub fn premium_count(&self, len: usize) -> usize {
        let share = (len as f64 * self.top_percentage).ceil().max(0.0) as usize;
        share.max(self.min_count).min(len)
    }
}

/// Indices into `entities` with their scores, best first. Equal scores keep
/// their input order.
pub fn rank<T>(entities: &[T], score: impl Fn(&T) -> f64) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = entities
        .iter()
        .enumerate()
        .map(|(i, e)| (i, score(e)))
        .collect();
    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ranked
}

/// Premium flag for every entity in input order. `predicate` receives the
/// entity, its score and its rank.
pub fn flags_by<T>(
    entities: &[T],
    score: impl Fn(&T) -> f64,
    predicate: impl Fn(&T, f64, usize) -> bool,
) -> Vec<bool> {
    let mut flags = vec![false; entities.len()];
    for (rank, (index, score)) in rank(entities, score).into_iter().enumerate() {
        flags[index] = predicate(&entities[index], score, rank);
    }
    flags
}

pub fn flags<T>(entities: &[T], score: impl Fn(&T) -> f64, policy: &PremiumPolicy) -> Vec<bool> {
    let count = policy.premium_count(entities.len());
    flags_by(entities, score, |_, _, rank| rank < count)
}

pub fn match_flags(matches: &[MatchStat], policy: &PremiumPolicy) -> Vec<bool> {
    let count = policy.premium_count(matches.len());
    flags_by(matches, super::matches::score, |stat, score, rank| {
        let threshold = if stat.is_ranked {
            RANKED_PREMIUM_SCORE
        } else {
            UNRANKED_PREMIUM_SCORE
        };
        score >= threshold || rank < count
    })
}

fn pair<T>(entities: &[T], flags: Vec<bool>) -> Vec<(&T, bool)> {
    entities.iter().zip(flags).collect()
}

pub fn determine<'e, T>(
    entities: &'e [T],
    score: impl Fn(&T) -> f64,
    policy: &PremiumPolicy,
) -> Vec<(&'e T, bool)> {
    pair(entities, flags(entities, score, policy))
}

pub fn determine_agents<'e>(
    agents: &'e [AgentStat],
    policy: &PremiumPolicy,
) -> Vec<(&'e AgentStat, bool)> {
    determine(agents, super::agent::score, policy)
}

pub fn determine_maps<'e>(
    maps: &'e [MapStat],
    policy: &PremiumPolicy,
) -> Vec<(&'e MapStat, bool)> {
    determine(maps, super::map::score, policy)
}

pub fn determine_weapons<'e>(
    weapons: &'e [WeaponStat],
    policy: &PremiumPolicy,
) -> Vec<(&'e WeaponStat, bool)> {
    determine(weapons, super::weapon::score, policy)
}

pub fn determine_seasons<'e>(
    seasons: &'e [SeasonStat],
    policy: &PremiumPolicy,
) -> Vec<(&'e SeasonStat, bool)> {
    determine(seasons, super::season::score, policy)
}

pub fn determine_matches<'e>(
    matches: &'e [MatchStat],
    policy: &PremiumPolicy,
) -> Vec<(&'e MatchStat, bool)> {
    pair(matches, match_flags(matches, policy))
}

/// Resets every flag and writes the new ones back. Returns how many entities
/// are premium now.
pub fn apply<T: ScoredEntity>(entities: &mut [T], flags: &[bool]) -> usize {
    debug_assert_eq!(entities.len(), flags.len());

    for entity in entities.iter_mut() {
        entity.set_premium_stats(false);
    }

    let mut premium = 0;
    for (entity, flag) in entities.iter_mut().zip(flags.iter().copied()) {
        if flag {
            entity.set_premium_stats(true);
            premium += 1;
        }
    }

    tracing::debug!("Marked {} of {} as premium", premium, entities.len());

    premium
}

pub fn mark_premium_agents(agents: &mut [AgentStat], policy: &PremiumPolicy) -> usize {
    let flags = flags(agents, super::agent::score, policy);
    apply(agents, &flags)
}

pub fn mark_premium_maps(maps: &mut [MapStat], policy: &PremiumPolicy) -> usize {
    let flags = flags(maps, super::map::score, policy);
    apply(maps, &flags)
}

pub fn mark_premium_weapons(weapons: &mut [WeaponStat], policy: &PremiumPolicy) -> usize {
    let flags = flags(weapons, super::weapon::score, policy);
    apply(weapons, &flags)
}

pub fn mark_premium_seasons(seasons: &mut [SeasonStat], policy: &PremiumPolicy) -> usize {
    let flags = flags(seasons, super::season::score, policy);
    apply(seasons, &flags)
}

pub fn mark_premium_matches(matches: &mut [MatchStat], policy: &PremiumPolicy) -> usize {
    let flags = match_flags(matches, policy);
    apply(matches, &flags)
}
