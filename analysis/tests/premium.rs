use analysis::premium::{agent, map, matches, policy, season, weapon};
use common::{
    AgentStat, ClutchCounts, MapSeasonPerformance, MapStat, MatchStat, MultiKills,
    SeasonDescriptor, SeasonPerformance, SeasonStat, WeaponCategory, WeaponSeasonPerformance,
    WeaponStat,
};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn descriptor(id: &str, is_active: bool) -> SeasonDescriptor {
    SeasonDescriptor {
        id: id.to_owned(),
        name: format!("Episode {}", id),
        is_active,
    }
}

fn agent_season(
    id: &str,
    is_active: bool,
    kills: u32,
    deaths: u32,
    won: u32,
    lost: u32,
) -> SeasonPerformance {
    SeasonPerformance {
        season: descriptor(id, is_active),
        kills,
        deaths,
        assists: 0,
        matches_won: won,
        matches_lost: lost,
        rounds_won: 0,
        rounds_lost: 0,
        playtime_millis: 0,
        plants: 0,
        defuses: 0,
        clutches: ClutchCounts::default(),
        ability_casts: 0,
        ability_damage: 0,
        map_results: Vec::new(),
    }
}

fn agent_stat(id: &str, seasons: Vec<SeasonPerformance>) -> AgentStat {
    AgentStat {
        agent_id: id.to_owned(),
        name: id.to_owned(),
        seasons,
        is_premium_stats: false,
    }
}

#[test]
fn active_agent_season() {
    let active = agent_season("e9", true, 200, 100, 62, 38);
    let old = agent_season("e8", false, 50, 100, 40, 60);

    assert_eq!(20.0, agent::season_score(&active));
    assert_eq!(30.0, agent::weighted_season_score(&active));
    assert_eq!(0.0, agent::weighted_season_score(&old));

    // One of two seasons is consistent.
    let stat = agent_stat("jett", vec![active, old]);
    assert_eq!(38.0, agent::score(&stat));
}

#[test]
fn agent_map_bonus() {
    let mut season = agent_season("e9", false, 0, 0, 0, 0);
    season.map_results = vec![
        common::MapResult {
            map_id: "ascent".to_owned(),
            wins: 7,
            losses: 3,
        },
        common::MapResult {
            map_id: "bind".to_owned(),
            wins: 2,
            losses: 0,
        },
    ];

    assert_eq!(Some(0.7), agent::best_map_win_rate(&season));
    assert_eq!(5.0, agent::season_score(&season));
}

#[test]
fn map_scores() {
    let season = MapSeasonPerformance {
        season: descriptor("e9", false),
        kills: 120,
        deaths: 100,
        matches_won: 11,
        matches_lost: 9,
        rounds_won: 60,
        rounds_lost: 40,
        attack_rounds_won: 28,
        attack_rounds_lost: 22,
        defense_rounds_won: 32,
        defense_rounds_lost: 18,
        plants: 10,
        defuses: 6,
        clutches: ClutchCounts {
            v1: 2,
            v2: 1,
            ..Default::default()
        },
        ability_damage: 1000,
        playtime_millis: 0,
    };

    // K/D 1.2 is not above 1.2, win rate 0.55 is not above 0.55.
    // 5 + 5 + 4 clutch + 3 ability + 6 side + 2 objectives
    assert_eq!(25.0, map::season_score(&season));

    let stat = MapStat {
        map_id: "ascent".to_owned(),
        name: "Ascent".to_owned(),
        seasons: vec![MapSeasonPerformance {
            season: descriptor("e10", true),
            ..season.clone()
        }],
        is_premium_stats: false,
    };
    // Not consistent, so only the active multiplier applies.
    assert_eq!(37.5, map::score(&stat));
}

fn weapon_stat(
    id: &str,
    category: WeaponCategory,
    headshots: u32,
    bodyshots: u32,
    legshots: u32,
) -> WeaponStat {
    WeaponStat {
        weapon_id: id.to_owned(),
        name: id.to_owned(),
        category,
        seasons: vec![WeaponSeasonPerformance {
            season: descriptor("e9", true),
            kills: 0,
            deaths: 0,
            headshots,
            bodyshots,
            legshots,
            damage: 0,
            rounds_played: 0,
            first_kills: 0,
            aces: 0,
        }],
        is_premium_stats: false,
    }
}

#[test]
fn sniper_headshots() {
    let operator = weapon_stat("operator", WeaponCategory::Sniper, 70, 30, 0);
    let totals: weapon::WeaponTotals = operator.seasons.iter().collect();
    let shots = weapon::ShotDistribution::new(totals.headshots, totals.bodyshots, totals.legshots);

    assert_eq!(25.0, weapon::headshot_score(WeaponCategory::Sniper, shots.headshot_percentage()));
    // 25 for headshots and 14 for the shot distribution.
    assert!((weapon::score(&operator) - 39.0).abs() < 1e-9);

    let marshal = weapon_stat("marshal", WeaponCategory::Sniper, 40, 60, 0);
    assert_eq!(12.0, weapon::headshot_score(WeaponCategory::Sniper, 40.0));
    assert!(weapon::score(&marshal) < weapon::score(&operator));
}

#[test]
fn weapon_totals_sum_seasons() {
    let mut vandal = weapon_stat("vandal", WeaponCategory::Rifle, 30, 60, 10);
    vandal.seasons.push(WeaponSeasonPerformance {
        season: descriptor("e8", false),
        ..vandal.seasons[0].clone()
    });

    let totals: weapon::WeaponTotals = vandal.seasons.iter().collect();
    assert_eq!(60, totals.headshots);
    assert_eq!(120, totals.bodyshots);
    assert_eq!(20, totals.legshots);
}

fn season_stat(id: &str, is_active: bool) -> SeasonStat {
    SeasonStat {
        season: descriptor(id, is_active),
        kills: 400,
        deaths: 250,
        matches_won: 30,
        matches_played: 50,
        rounds_won: 600,
        rounds_played: 1000,
        mvps: 12,
        first_kills: 160,
        aces: 3,
        damage: 155_000,
        plants: 100,
        defuses: 60,
        rank_tier: 21,
        playtime_millis: 60 * 3_600_000,
        is_premium_stats: false,
    }
}

#[test]
fn season_components() {
    let components = season::components(&season_stat("e9", false));

    assert_eq!(10.0, components.kd);
    assert_eq!(7.0, components.match_win_rate);
    assert_eq!(8.0, components.round_win_rate);
    assert_eq!(5.0, components.mvp_rate);
    assert_eq!(5.0, components.first_kill_rate);
    assert_eq!(4.0, components.ace_rate);
    assert_eq!(7.0, components.damage_per_round);
    assert_eq!(4.0, components.objective_rate);
    assert_eq!(7.0, components.rank_tier);
    assert_eq!(5.0, components.playtime);
    assert_eq!(62.0, components.total());

    assert_eq!(62.0, season::score(&season_stat("e9", false)));
    assert!((season::score(&season_stat("e10", true)) - 71.3).abs() < 1e-9);
}

#[test]
fn empty_season() {
    let empty = SeasonStat {
        season: descriptor("e1", false),
        kills: 0,
        deaths: 0,
        matches_won: 0,
        matches_played: 0,
        rounds_won: 0,
        rounds_played: 0,
        mvps: 0,
        first_kills: 0,
        aces: 0,
        damage: 0,
        plants: 0,
        defuses: 0,
        rank_tier: 0,
        playtime_millis: 0,
        is_premium_stats: false,
    };

    assert_eq!(0.0, season::score(&empty));
}

fn strong_match(id: &str, is_ranked: bool) -> MatchStat {
    MatchStat {
        match_id: id.to_owned(),
        is_ranked,
        kills: 30,
        deaths: 10,
        assists: 5,
        headshots: 40,
        bodyshots: 55,
        legshots: 5,
        score: 6200,
        rounds_played: 20,
        round_scores: vec![600; 20],
        clutches: 0,
        multi_kills: MultiKills::default(),
        team_kills: 200,
        is_premium_stats: false,
    }
}

fn weak_match(id: &str) -> MatchStat {
    MatchStat {
        match_id: id.to_owned(),
        is_ranked: false,
        kills: 5,
        deaths: 20,
        assists: 1,
        headshots: 0,
        bodyshots: 20,
        legshots: 5,
        score: 1000,
        rounds_played: 20,
        round_scores: vec![50; 20],
        clutches: 0,
        multi_kills: MultiKills::default(),
        team_kills: 60,
        is_premium_stats: false,
    }
}

#[test]
fn match_scores() {
    // 20 K/D + 15 headshots + 20 combat score + 20 round impact, ranked.
    assert_eq!(90.0, matches::score(&strong_match("m", true)));
    assert_eq!(75.0, matches::score(&strong_match("m", false)));
    assert_eq!(0.0, matches::score(&weak_match("m")));

    let mut carried = strong_match("m", true);
    carried.clutches = 5;
    carried.multi_kills = MultiKills {
        double: 4,
        triple: 2,
        quadra: 1,
        penta: 1,
    };
    assert_eq!(100.0, matches::score(&carried));
}

#[test]
fn ranked_matches_above_threshold_are_premium() {
    let mut collection: Vec<MatchStat> =
        (0..7).map(|i| weak_match(&format!("weak-{}", i))).collect();
    collection.extend((0..3).map(|i| strong_match(&format!("strong-{}", i), true)));

    let result = policy::determine_matches(&collection, &policy::PremiumPolicy::matches());

    let premium: Vec<&str> = result
        .iter()
        .filter(|(_, premium)| *premium)
        .map(|(m, _)| m.match_id.as_str())
        .collect();
    assert_eq!(vec!["strong-0", "strong-1", "strong-2"], premium);
}

#[test]
fn unranked_matches_need_more() {
    // Scores 75 unranked, below the unranked threshold, so only the top 20% count.
    let collection: Vec<MatchStat> = (0..10)
        .map(|i| strong_match(&format!("m-{}", i), false))
        .collect();

    let flags = policy::match_flags(&collection, &policy::PremiumPolicy::matches());
    assert_eq!(2, flags.iter().filter(|f| **f).count());
    assert!(flags[0] && flags[1]);
}

#[test]
fn threshold_or_rank() {
    let scores = [80.0, 80.0, 80.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0];
    let count = policy::PremiumPolicy::matches().premium_count(scores.len());
    assert_eq!(2, count);

    let flags = policy::flags_by(&scores, |s| *s, |_, score, rank| score >= 75.0 || rank < count);
    assert_eq!(3, flags.iter().filter(|f| **f).count());
}

#[test]
#[traced_test]
fn marking_is_idempotent() {
    let mut agents: Vec<AgentStat> = (0..7)
        .map(|i| {
            agent_stat(
                &format!("agent-{}", i),
                vec![agent_season("e9", i % 2 == 0, 100 + i * 20, 100, 50 + i, 50)],
            )
        })
        .collect();
    agents[3].is_premium_stats = true;

    let policy = policy::PremiumPolicy::default();
    let first = policy::mark_premium_agents(&mut agents, &policy);
    let first_flags: Vec<bool> = agents.iter().map(|a| a.is_premium_stats).collect();

    let second = policy::mark_premium_agents(&mut agents, &policy);
    let second_flags: Vec<bool> = agents.iter().map(|a| a.is_premium_stats).collect();

    assert_eq!(3, first);
    assert_eq!(first, second);
    assert_eq!(first_flags, second_flags);
    assert_eq!(policy.premium_count(agents.len()), first);
    assert!(logs_contain("Marked 3 of 7 as premium"));
}

#[test]
fn determine_does_not_touch_entities() {
    let agents = vec![
        agent_stat("weak", vec![agent_season("e9", false, 10, 100, 1, 9)]),
        agent_stat("strong", vec![agent_season("e9", true, 200, 100, 62, 38)]),
    ];

    let result = policy::determine_agents(&agents, &policy::PremiumPolicy::default());

    assert_eq!(2, result.len());
    assert_eq!(("weak", false), (result[0].0.agent_id.as_str(), result[0].1));
    assert_eq!(("strong", true), (result[1].0.agent_id.as_str(), result[1].1));
    assert!(agents.iter().all(|a| !a.is_premium_stats));
}

#[test]
fn other_collections() {
    let mut weapons = vec![
        weapon_stat("classic", WeaponCategory::Sidearm, 5, 50, 20),
        weapon_stat("operator", WeaponCategory::Sniper, 70, 30, 0),
        weapon_stat("judge", WeaponCategory::Shotgun, 5, 90, 5),
    ];
    assert_eq!(1, policy::mark_premium_weapons(&mut weapons, &policy::PremiumPolicy::default()));
    assert!(weapons[1].is_premium_stats);

    let mut seasons = vec![season_stat("e8", false), season_stat("e9", true)];
    assert_eq!(1, policy::mark_premium_seasons(&mut seasons, &policy::PremiumPolicy::default()));
    assert!(seasons[1].is_premium_stats);

    let mut maps: Vec<MapStat> = Vec::new();
    assert_eq!(0, policy::mark_premium_maps(&mut maps, &policy::PremiumPolicy::default()));
}

#[test]
fn saturated_counters_still_score() {
    let max = u32::MAX;

    let mut agent_season = agent_season("e9", false, max, 1, max, max);
    agent_season.rounds_won = max;
    agent_season.rounds_lost = max;
    agent_season.clutches = ClutchCounts {
        v1: max,
        v5: max,
        ..Default::default()
    };
    agent_season.map_results = vec![common::MapResult {
        map_id: "ascent".to_owned(),
        wins: max,
        losses: max,
    }];
    assert!(agent::score(&agent_stat("jett", vec![agent_season])).is_finite());

    let map_season = MapSeasonPerformance {
        season: descriptor("e9", false),
        kills: max,
        deaths: 0,
        matches_won: max,
        matches_lost: max,
        rounds_won: max,
        rounds_lost: max,
        attack_rounds_won: max,
        attack_rounds_lost: max,
        defense_rounds_won: max,
        defense_rounds_lost: max,
        plants: max,
        defuses: max,
        clutches: ClutchCounts {
            v5: max,
            ..Default::default()
        },
        ability_damage: max,
        playtime_millis: u64::MAX,
    };
    assert!(map::season_score(&map_season).is_finite());

    let mut season = season_stat("e9", false);
    season.plants = max;
    season.defuses = max;
    assert!(season::score(&season).is_finite());

    let mut vandal = weapon_stat("vandal", WeaponCategory::Rifle, max, max, max);
    vandal.seasons[0].kills = max;
    vandal.seasons[0].rounds_played = max;
    vandal.seasons.push(vandal.seasons[0].clone());
    let totals: weapon::WeaponTotals = vandal.seasons.iter().collect();
    assert_eq!(2 * max as u64, totals.headshots);
    assert!(weapon::score(&vandal).is_finite());

    let mut stat = strong_match("m1", true);
    stat.headshots = max;
    stat.bodyshots = max;
    stat.legshots = max;
    assert!((0.0..=100.0).contains(&matches::score(&stat)));
}
