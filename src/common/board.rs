//! The board module contains the data model for the Fish game board.
//! The board knows its own width and height and holds a grid of tiles
//! addressed by [`Position`]. Reachability along the six hex directions
//! is computed here rather than on `Tile` itself, since `Tile` carries
//! no neighbor links in this model - the board holds the grid and
//! knows how to walk it.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::common::position::{Direction, Position};
use crate::common::tile::Tile;

/// How to populate a freshly constructed board. See `BoardConfig` for
/// the three ways a match's board can be described.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardConfig {
    /// Every tile on the board carries the same number of fish, and there
    /// are no holes.
    Uniform { height: u32, width: u32, fish_per_tile: u8 },

    /// The exact contents of the board, in row-major order. A 0 entry is
    /// a hole; any other entry is a fish-tile with that many fish.
    Explicit { rows: Vec<Vec<u8>> },

    /// A board with at least `min_one_fish_tiles` tiles carrying exactly
    /// one fish, with holes filling in wherever convenient. This crate's
    /// constructor places holes greedily from the end of the grid, which
    /// is sufficient since callers only care about the minimum count, not
    /// which specific tiles are holes.
    MinimumOneFishTiles {
        height: u32,
        width: u32,
        min_one_fish_tiles: u32,
    },
}

impl BoardConfig {
    /// The board's height and width, without constructing it.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            BoardConfig::Uniform { height, width, .. } => (*height, *width),
            BoardConfig::Explicit { rows } => {
                (rows.len() as u32, rows.first().map_or(0, |row| row.len()) as u32)
            }
            BoardConfig::MinimumOneFishTiles { height, width, .. } => (*height, *width),
        }
    }
}

/// The fish game board: a rectangular grid of tiles, addressed by
/// `Position { row, col }`. A hole is represented by `Tile::Hole` rather
/// than by the tile's absence, so every in-bounds position always has
/// an entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<Vec<Tile>>,
    pub width: u32,
    pub height: u32,
}

impl Board {
    /// Creates a board from a `BoardConfig`. See `BoardConfig` for the
    /// three supported shapes.
    ///
    /// Panics if `Explicit` rows are not rectangular, or if
    /// `MinimumOneFishTiles` cannot fit the requested count on the given
    /// dimensions - both are caller bugs, not match-time failures, so the
    /// referee validates board configs against its player count before
    /// ever constructing a `Board` from one (see `RefereeError::BoardTooSmall`).
    pub fn new(config: BoardConfig) -> Board {
        match config {
            BoardConfig::Uniform { height, width, fish_per_tile } => {
                Board::with_no_holes(height, width, fish_per_tile)
            }
            BoardConfig::Explicit { rows } => Board::from_rows(rows),
            BoardConfig::MinimumOneFishTiles {
                height,
                width,
                min_one_fish_tiles,
            } => Board::with_min_one_fish_tiles(height, width, min_one_fish_tiles),
        }
    }

    /// Creates a board that has the same number of fish on every tile and
    /// has no holes.
    pub fn with_no_holes(height: u32, width: u32, fish_per_tile: u8) -> Board {
        let rows = vec![vec![Tile::Fish(fish_per_tile); width as usize]; height as usize];
        Board { rows, width, height }
    }

    /// Creates a board from a 2-D Vec in row-major order, where each entry
    /// is the fish count at that position, or 0 for a hole.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Board {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len()) as u32;
        assert!(
            rows.iter().all(|row| row.len() as u32 == width),
            "Board::from_rows requires every row to have the same length"
        );

        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|count| if count == 0 { Tile::Hole } else { Tile::Fish(count) })
                    .collect()
            })
            .collect();

        Board { rows, width, height }
    }

    /// Creates a board with at least `min_one_fish_tiles` one-fish tiles,
    /// filling any remaining capacity with holes starting from the last
    /// position in row-major order.
    pub fn with_min_one_fish_tiles(height: u32, width: u32, min_one_fish_tiles: u32) -> Board {
        let total_tiles = height * width;
        assert!(
            min_one_fish_tiles <= total_tiles,
            "Board::with_min_one_fish_tiles asked for {} one-fish tiles but the board only has {} positions",
            min_one_fish_tiles,
            total_tiles
        );

        let mut board = Board::with_no_holes(height, width, 1);
        let holes_needed = total_tiles - min_one_fish_tiles;
        for i in 0..holes_needed {
            let row = total_tiles - 1 - i;
            let position = Position::new(row / width, row % width);
            board = board.remove_tile(position);
        }
        board
    }

    /// Returns the tile at the given position, or None if out of bounds.
    pub fn get_tile(&self, position: Position) -> Option<Tile> {
        self.rows.get(position.row as usize)?.get(position.col as usize).copied()
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.row < self.height && position.col < self.width
    }

    /// Removes the tile at the given position, turning it into a hole.
    /// Returns a new board; the receiver is unaffected. Removing a hole
    /// (or an out-of-bounds position) is a no-op that returns an
    /// unchanged board.
    pub fn remove_tile(&self, position: Position) -> Board {
        let mut board = self.clone();
        if let Some(row) = board.rows.get_mut(position.row as usize) {
            if let Some(tile) = row.get_mut(position.col as usize) {
                *tile = Tile::Hole;
            }
        }
        board
    }

    /// Counts the number of non-hole tiles on the board.
    pub fn non_hole_tile_count(&self) -> usize {
        self.rows.iter().flatten().filter(|tile| !tile.is_hole()).count()
    }

    /// Returns every position reachable from `source` by an uninterrupted
    /// straight line in any of the six directions, excluding `source`
    /// itself. A ray stops at the first hole or the edge of the board;
    /// positions in `occupied` block the ray the same way a hole does,
    /// but are not themselves reachable.
    pub fn reachable_from(&self, source: Position, occupied: &HashSet<Position>) -> HashSet<Position> {
        let mut reachable = HashSet::new();
        for direction in Direction::iter() {
            let mut current = source;
            while let Some(next) = direction.step(current) {
                if !self.in_bounds(next) {
                    break;
                }
                match self.get_tile(next) {
                    Some(Tile::Fish(_)) if !occupied.contains(&next) => {
                        reachable.insert(next);
                        current = next;
                    }
                    _ => break,
                }
            }
        }
        reachable
    }
}
