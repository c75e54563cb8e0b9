//! The code in this file represents the actions a player can take
//! during a match: placing a penguin during phase 2, and moving or
//! skipping during phase 3.
use serde::{Deserialize, Serialize};

use crate::common::position::Position;

/// An action taken (or attempted) by the current player on their turn.
/// `Place` is only legal during placement; `Move` and `Skip` are only
/// legal during the turn phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Place(Position),
    Move(Position, Position),
    Skip,
}

impl Action {
    pub fn as_move(self) -> Option<(Position, Position)> {
        match self {
            Action::Move(src, dst) => Some((src, dst)),
            _ => None,
        }
    }

    pub fn as_place(self) -> Option<Position> {
        match self {
            Action::Place(pos) => Some(pos),
            _ => None,
        }
    }
}

#[test]
fn test_as_move() {
    let action = Action::Move(Position::new(0, 0), Position::new(1, 1));
    assert_eq!(action.as_move(), Some((Position::new(0, 0), Position::new(1, 1))));
    assert_eq!(Action::Skip.as_move(), None);
}

#[test]
fn test_as_place() {
    let action = Action::Place(Position::new(2, 2));
    assert_eq!(action.as_place(), Some(Position::new(2, 2)));
    assert_eq!(Action::Skip.as_place(), None);
}

#[test]
fn test_skip_orders_greatest() {
    // Invariant 5 in the spec: Skip compares greater than every Move.
    let move_action = Action::Move(Position::new(9, 9), Position::new(9, 9));
    assert!(move_action < Action::Skip);
}
