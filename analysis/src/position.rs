//! Maps a point on the minimap to the closest named callout and a tactical
//! role.
//!
//! The role depends on the callout's super-region, its region and the side the
//! player is on in that round:
//!
//! | super-region     | region                                   | attack     | defense    |
//! |------------------|------------------------------------------|------------|------------|
//! | A / B / C        | Site, Default, Back, Hell                | Entry      | Anchor     |
//! | A / B / C        | Main, Short                              | Entry      | Forward    |
//! | A / B / C        | Long                                     | Aggressive | Forward    |
//! | A / B / C        | Lobby, Garden                            | Lurk       | Aggressive |
//! | A / B / C        | Link, Connector                          | Control    | Control    |
//! | A / B / C        | Heaven, Rafters, Tower                   | Control    | Anchor     |
//! | A / B / C        | anything else                            | Entry      | Anchor     |
//! | Mid              | Courtyard, Market, Pizza, Tiles, Window  | Control    | Control    |
//! | Mid              | Top, Doors, Cubby                        | Aggressive | Forward    |
//! | Mid              | Bottom, Link, Connector                  | Lurk       | Control    |
//! | Mid              | anything else                            | Control    | Control    |
//! | Attacker Side    | Spawn                                    | Balanced   | Aggressive |
//! | Attacker Side    | anything else                            | Lurk       | Aggressive |
//! | Defender Side    | Spawn                                    | Lurk       | Balanced   |
//! | Defender Side    | anything else                            | Lurk       | Anchor     |
//! | anything else    |                                          | Balanced   | Balanced   |

use common::{Location, PositionType, TeamColor};
use std::collections::HashMap;

/// Rounds before this one are played in the first half.
pub const SECOND_HALF_START: u32 = 12;

pub const UNKNOWN_SITE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Callout {
    pub region_name: String,
    pub super_region_name: String,
    pub location: Location,
}

/// Read-only lookup of every map's callouts, keyed by map id.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CalloutIndex {
    maps: HashMap<String, Vec<Callout>>,
}

impl CalloutIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, map_id: impl Into<String>, callouts: Vec<Callout>) {
        self.maps.insert(map_id.into(), callouts);
    }

    pub fn get(&self, map_id: &str) -> &[Callout] {
        self.maps.get(map_id).map(|c| c.as_slice()).unwrap_or(&[])
    }
}

impl FromIterator<(String, Vec<Callout>)> for CalloutIndex {
    fn from_iter<T: IntoIterator<Item = (String, Vec<Callout>)>>(iter: T) -> Self {
        Self {
            maps: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Attack,
    Defense,
}

/// Red attacks first, teams swap at [`SECOND_HALF_START`].
pub fn side(round_num: u32, team: TeamColor) -> Side {
    let first_half = round_num < SECOND_HALF_START;
    match (team, first_half) {
        (TeamColor::Red, true) | (TeamColor::Blue, false) => Side::Attack,
        (TeamColor::Red, false) | (TeamColor::Blue, true) => Side::Defense,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// Super-region of the closest callout, e.g. `A` or `Mid`.
    pub site: String,
    pub region: Option<String>,
    pub position_type: PositionType,
}

impl Position {
    pub fn unknown() -> Self {
        Self {
            site: UNKNOWN_SITE.to_owned(),
            region: None,
            position_type: PositionType::Balanced,
        }
    }
}

static SITE_REGIONS: phf::Map<&'static str, (PositionType, PositionType)> = phf::phf_map! {
    "Site" => (PositionType::Entry, PositionType::Anchor),
    "Default" => (PositionType::Entry, PositionType::Anchor),
    "Back" => (PositionType::Entry, PositionType::Anchor),
    "Hell" => (PositionType::Entry, PositionType::Anchor),
    "Main" => (PositionType::Entry, PositionType::Forward),
    "Short" => (PositionType::Entry, PositionType::Forward),
    "Long" => (PositionType::Aggressive, PositionType::Forward),
    "Lobby" => (PositionType::Lurk, PositionType::Aggressive),
    "Garden" => (PositionType::Lurk, PositionType::Aggressive),
    "Link" => (PositionType::Control, PositionType::Control),
    "Connector" => (PositionType::Control, PositionType::Control),
    "Heaven" => (PositionType::Control, PositionType::Anchor),
    "Rafters" => (PositionType::Control, PositionType::Anchor),
    "Tower" => (PositionType::Control, PositionType::Anchor),
};

static MID_REGIONS: phf::Map<&'static str, (PositionType, PositionType)> = phf::phf_map! {
    "Courtyard" => (PositionType::Control, PositionType::Control),
    "Market" => (PositionType::Control, PositionType::Control),
    "Pizza" => (PositionType::Control, PositionType::Control),
    "Tiles" => (PositionType::Control, PositionType::Control),
    "Window" => (PositionType::Control, PositionType::Control),
    "Top" => (PositionType::Aggressive, PositionType::Forward),
    "Doors" => (PositionType::Aggressive, PositionType::Forward),
    "Cubby" => (PositionType::Aggressive, PositionType::Forward),
    "Bottom" => (PositionType::Lurk, PositionType::Control),
    "Link" => (PositionType::Lurk, PositionType::Control),
    "Connector" => (PositionType::Lurk, PositionType::Control),
};

pub fn position_type(super_region: &str, region: &str, side: Side) -> PositionType {
    let (attack, defense) = match super_region {
        "A" | "B" | "C" => SITE_REGIONS
            .get(region)
            .copied()
            .unwrap_or((PositionType::Entry, PositionType::Anchor)),
        "Mid" => MID_REGIONS
            .get(region)
            .copied()
            .unwrap_or((PositionType::Control, PositionType::Control)),
        "Attacker Side" if region == "Spawn" => (PositionType::Balanced, PositionType::Aggressive),
        "Attacker Side" => (PositionType::Lurk, PositionType::Aggressive),
        "Defender Side" if region == "Spawn" => (PositionType::Lurk, PositionType::Balanced),
        "Defender Side" => (PositionType::Lurk, PositionType::Anchor),
        _ => (PositionType::Balanced, PositionType::Balanced),
    };

    match side {
        Side::Attack => attack,
        Side::Defense => defense,
    }
}

/// Linear nearest neighbour search, the first callout wins on ties.
pub fn nearest<'c>(point: &Location, callouts: &'c [Callout]) -> Option<&'c Callout> {
    let mut best: Option<(&Callout, f64)> = None;
    for callout in callouts.iter() {
        let distance = point.distance(&callout.location);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((callout, distance)),
        }
    }
    best.map(|(c, _)| c)
}

pub fn classify(
    point: Option<&Location>,
    callouts: &[Callout],
    round_num: u32,
    team: TeamColor,
) -> Position {
    let point = match point {
        Some(p) if p.x.is_finite() && p.y.is_finite() => p,
        Some(p) => {
            tracing::warn!("Cannot classify non-finite location {:?}", p);
            return Position::unknown();
        }
        None => return Position::unknown(),
    };

    let callout = match nearest(point, callouts) {
        Some(c) => c,
        None => {
            tracing::warn!("No callouts available to classify {:?}", point);
            return Position::unknown();
        }
    };

    tracing::trace!(
        "Location {:?} -> {} {}",
        point,
        callout.super_region_name,
        callout.region_name
    );

    Position {
        site: callout.super_region_name.clone(),
        region: Some(callout.region_name.clone()),
        position_type: position_type(
            &callout.super_region_name,
            &callout.region_name,
            side(round_num, team),
        ),
    }
}

/// Classifier bound to an injected callout index.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'i> {
    index: &'i CalloutIndex,
}

impl<'i> Classifier<'i> {
    pub fn new(index: &'i CalloutIndex) -> Self {
        Self { index }
    }

    pub fn classify(
        &self,
        map_id: &str,
        point: Option<&Location>,
        round_num: u32,
        team: TeamColor,
    ) -> Position {
        classify(point, self.index.get(map_id), round_num, team)
    }
}
