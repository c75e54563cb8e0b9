//! The tile module represents the data model for a single cell of the
//! fish game board: either a hole, or a fish-tile carrying a positive
//! fish count.
use serde::{Deserialize, Serialize};

/// A single cell of the board. A hole cannot be landed on or passed
/// through; a fish-tile carries a positive number of fish that are
/// collected by the player who moves off of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Hole,
    Fish(u8),
}

impl Tile {
    /// Returns the number of fish on this tile, or 0 if it is a hole.
    pub fn fish_count(self) -> u8 {
        match self {
            Tile::Hole => 0,
            Tile::Fish(count) => count,
        }
    }

    pub fn is_hole(self) -> bool {
        matches!(self, Tile::Hole)
    }
}

#[test]
fn test_fish_count() {
    assert_eq!(Tile::Hole.fish_count(), 0);
    assert_eq!(Tile::Fish(3).fish_count(), 3);
}

#[test]
fn test_is_hole() {
    assert!(Tile::Hole.is_hole());
    assert!(!Tile::Fish(1).is_hole());
}
