//! This file contains the data representation of a seated player's
//! in-game state: their color, score, and placed penguins. It is
//! agnostic of the player's external identity (connection, name,
//! etc.) - that bookkeeping belongs to the referee.
use serde::{Deserialize, Serialize};

use crate::common::penguin::Penguin;
use crate::common::position::Position;

/// The fixed, ordered set of colors a match can assign. Colors are handed
/// out in this order as players are seated: the first player gets Red,
/// the second White, and so on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    White,
    Brown,
    Black,
}

impl PlayerColor {
    pub const ORDER: [PlayerColor; 4] =
        [PlayerColor::Red, PlayerColor::White, PlayerColor::Brown, PlayerColor::Black];

    pub fn iter() -> impl Iterator<Item = PlayerColor> {
        PlayerColor::ORDER.into_iter()
    }
}

/// Represents a seated player: their assigned color, accumulated score,
/// and the penguins they have placed so far, in placement order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub color: PlayerColor,
    pub score: usize,
    pub penguins: Vec<Penguin>,
}

impl PlayerState {
    pub fn new(color: PlayerColor) -> PlayerState {
        PlayerState { color, score: 0, penguins: Vec::new() }
    }

    /// Every position currently occupied by one of this player's penguins.
    pub fn penguin_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.penguins.iter().map(|penguin| penguin.position)
    }

    pub fn has_penguin_at(&self, position: Position) -> bool {
        self.penguins.iter().any(|penguin| penguin.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_order() {
        let colors: Vec<PlayerColor> = PlayerColor::iter().collect();
        assert_eq!(
            colors,
            vec![PlayerColor::Red, PlayerColor::White, PlayerColor::Brown, PlayerColor::Black]
        );
    }

    #[test]
    fn test_new_player_state() {
        let player = PlayerState::new(PlayerColor::Red);
        assert_eq!(player.score, 0);
        assert!(player.penguins.is_empty());
    }

    #[test]
    fn test_has_penguin_at() {
        let mut player = PlayerState::new(PlayerColor::Red);
        player.penguins.push(Penguin::new(Position::new(0, 0)));
        assert!(player.has_penguin_at(Position::new(0, 0)));
        assert!(!player.has_penguin_at(Position::new(1, 1)));
    }
}
