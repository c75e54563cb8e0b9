//! A referee, board/state model, and in-house strategy for running
//! games of Fish between pluggable agents.
pub mod agent;
pub mod common;
pub mod referee;
pub mod strategy;

pub use agent::{InHouseAgent, Player};
pub use common::board::{Board, BoardConfig};
pub use common::game_state::GameState;
pub use common::player_state::PlayerColor;
pub use referee::{GameResult, Referee, RefereeConfig};
