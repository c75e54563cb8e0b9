//! The referee's tunable surface: five timeouts and the board shape for
//! the match about to be run. Bundled into one value so constructing a
//! `Referee` takes a single config rather than a handful of loose
//! `Duration` arguments.
use std::time::Duration;

use crate::common::board::BoardConfig;

/// Configuration for a single match. `Default` gives the spec's default
/// values: ten seconds for every timeout, and a 5x5 board of 3-fish
/// tiles.
#[derive(Clone, Debug)]
pub struct RefereeConfig {
    pub board: BoardConfig,

    pub color_assignment_timeout: Duration,
    pub placement_timeout: Duration,
    pub turn_timeout: Duration,
    pub inform_disqualified_timeout: Duration,
    pub observer_timeout: Duration,
}

impl Default for RefereeConfig {
    fn default() -> RefereeConfig {
        RefereeConfig {
            board: BoardConfig::Uniform { height: 5, width: 5, fish_per_tile: 3 },
            color_assignment_timeout: Duration::from_secs(10),
            placement_timeout: Duration::from_secs(10),
            turn_timeout: Duration::from_secs(10),
            inform_disqualified_timeout: Duration::from_secs(10),
            observer_timeout: Duration::from_secs(10),
        }
    }
}
