//! The code in this file implements the Penguin in-game avatar's
//! data representation. A Penguin is otherwise opaque: it owns a
//! position on the board and nothing else.
use serde::{Deserialize, Serialize};

use crate::common::position::Position;

/// Represents a single placed Penguin in the Fish game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Penguin {
    pub position: Position,
}

impl Penguin {
    pub fn new(position: Position) -> Penguin {
        Penguin { position }
    }
}

#[test]
fn test_new() {
    let penguin = Penguin::new(Position::new(1, 2));
    assert_eq!(penguin.position, Position::new(1, 2));
}
