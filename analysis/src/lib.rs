//! Match telemetry analytics: per-round performance, team statistics and the
//! premium scoring of agents, maps, weapons, seasons and matches.

pub mod tiers;

pub mod combat;
pub mod contact;
pub mod position;
pub mod utility;

pub mod impact;
pub mod improvement;
pub mod perround;
pub mod teamstats;

pub mod premium;
