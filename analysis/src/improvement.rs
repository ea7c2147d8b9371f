//! Rule based coaching suggestions for a single round.
//!
//! Every rule is checked on its own, so a round can yield none or several
//! suggestions. They are emitted in rule order.

use crate::perround::RoundStats;
use common::{PositionType, RoundOutcome};

const LOW_HEADSHOT_PERCENTAGE: f64 = 15.0;
const LOW_LOADOUT_RATIO: f64 = 0.7;
const OVERBUY_RATIO: f64 = 1.2;
const LOW_ABILITY_USAGE: f64 = 0.5;

fn combat(stats: &RoundStats, out: &mut Vec<String>) {
    let combat = &stats.combat;

    if combat.kills == 0 && combat.deaths > 0 {
        out.push(
            "Work on crosshair placement: keep it at head height and pre-aim common angles."
                .to_owned(),
        );
    }
    if combat.headshot_percentage < LOW_HEADSHOT_PERCENTAGE {
        out.push(
            "Your headshot rate is low, spend some time in aim practice before queueing."
                .to_owned(),
        );
    }
    if combat.deaths > combat.kills.saturating_add(1) {
        out.push(
            "Focus on survival: avoid fights you cannot win and fall back when outnumbered."
                .to_owned(),
        );
    }
    if combat.deaths > 0 && !combat.was_traded {
        out.push(
            "Your death was not traded, position closer to your teammates so they can refrag."
                .to_owned(),
        );
    }
}

fn economy(stats: &RoundStats, out: &mut Vec<String>) {
    let economy = &stats.economy;
    let loadout = economy.loadout_value as f64;

    if loadout < economy.enemy_loadout_value * LOW_LOADOUT_RATIO {
        out.push(
            "You were heavily out-bought this round, coordinate saves and buys with your team."
                .to_owned(),
        );
    }
    if economy.credits_spent as f64 > loadout * OVERBUY_RATIO {
        out.push(
            "You spent more than your loadout is worth, avoid overbuying and save for next round."
                .to_owned(),
        );
    }
}

fn positioning(stats: &RoundStats, out: &mut Vec<String>) {
    let positioning = &stats.positioning;
    let combat = &stats.combat;
    let died_without_kill = combat.deaths > 0 && combat.kills == 0;

    if died_without_kill {
        let tip = match positioning.position_type {
            PositionType::Entry => {
                Some("As the entry, make sure utility clears the site before you swing in.")
            }
            PositionType::Aggressive => {
                Some("Your aggressive position got punished, wait for information before pushing.")
            }
            PositionType::Anchor => {
                Some("As an anchor, play for time and retake instead of taking early duels.")
            }
            _ => None,
        };
        out.extend(tip.map(str::to_owned));
    }
    if positioning.position_type == PositionType::Lurk && stats.outcome == RoundOutcome::Lost {
        out.push(
            "Time your lurk with the team's execute so the flank pressure helps the round."
                .to_owned(),
        );
    }
    if positioning.first_contact
        && combat.deaths > 0
        && matches!(positioning.site.as_str(), "A" | "B")
    {
        out.push(format!(
            "You lost the opening duel on {} site, hold a tighter defensive angle there.",
            positioning.site
        ));
    }
    if positioning.first_contact && combat.kills == 0 {
        out.push(
            "You took first contact without a kill, make sure a teammate is ready to support you."
                .to_owned(),
        );
    }
}

fn utility(stats: &RoundStats, out: &mut Vec<String>) {
    let utility = &stats.utility;
    let usage = utility.abilities_used as f64 / (utility.total_abilities as f64).max(1.0);

    if usage < LOW_ABILITY_USAGE {
        out.push(
            "Use your abilities more, unused utility is wasted at the end of the round."
                .to_owned(),
        );
    }
    if utility.utility_damage == 0 && utility.abilities_used > 0 {
        out.push("Your utility did no damage, aim it to deal damage or deny space.".to_owned());
    }
}

pub fn suggest(stats: &RoundStats) -> Vec<String> {
    let mut suggestions = Vec::new();

    combat(stats, &mut suggestions);
    economy(stats, &mut suggestions);
    positioning(stats, &mut suggestions);
    utility(stats, &mut suggestions);

    suggestions
}
