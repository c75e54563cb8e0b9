//! The position module contains utilities for working with Positions -
//! a (row, col) pair used to address a single hex cell of the board.
//!
//! Among other things, Position is useful to help differentiate
//! board coordinates from other kinds of indices when writing function
//! signatures.
use serde::{Deserialize, Serialize};

/// Represents the row and column of a tile on the board, starting at 0.
/// Row is the y-axis (which row, top to bottom); col is the x-axis
/// (which column, left to right) within that row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Position {
        Position { row, col }
    }
}

impl From<(u32, u32)> for Position {
    /// A Position can be made from a (row, col) tuple. For example:
    /// `Position::from((0, 1))` or `(0, 1).into()`
    fn from((row, col): (u32, u32)) -> Position {
        Position { row, col }
    }
}

/// Represents a direction from a hexagonal tile on the game board.
/// Note that tiles do not have neighbors directly to the east or west;
/// the hexagons are arranged in vertically-offset columns, so "north"
/// and "south" skip over the interleaved row rather than landing on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Northeast,
    Northwest,
    North,
    South,
    Southeast,
    Southwest,
}

impl Direction {
    pub fn iter() -> impl ExactSizeIterator<Item = Direction> {
        use Direction::*;
        [Northeast, Northwest, North, South, Southeast, Southwest].into_iter()
    }

    /// Computes the position one step away from `from` in this direction,
    /// or None if that would require a negative row or column.
    ///
    /// The offsets along North/South skip a row because the board's hexagons
    /// in adjacent rows are horizontally staggered by half a tile; going two
    /// rows keeps the same column aligned. Diagonal neighbors shift by one
    /// column in the direction the row above/below is staggered, which
    /// depends on whether `from.row` is even or odd.
    pub fn step(self, from: Position) -> Option<Position> {
        let row = from.row as i64;
        let col = from.col as i64;
        let is_odd_row = row % 2;
        let is_even_row = (row + 1) % 2;

        let (new_row, new_col) = match self {
            Direction::Northeast => (row - 1, col + is_odd_row),
            Direction::Northwest => (row - 1, col - is_even_row),
            Direction::North => (row - 2, col),
            Direction::South => (row + 2, col),
            Direction::Southeast => (row + 1, col + is_odd_row),
            Direction::Southwest => (row + 1, col - is_even_row),
        };

        if new_row < 0 || new_col < 0 {
            None
        } else {
            Some(Position::new(new_row as u32, new_col as u32))
        }
    }

    pub fn opposite(self) -> Direction {
        use Direction::*;
        match self {
            Northeast => Southwest,
            Northwest => Southeast,
            North => South,
            South => North,
            Southeast => Northwest,
            Southwest => Northeast,
        }
    }
}

#[test]
fn test_opposite() {
    use Direction::*;
    assert_eq!(Northeast.opposite(), Southwest);
    assert_eq!(Northwest.opposite(), Southeast);
    assert_eq!(North.opposite(), South);
    assert_eq!(South.opposite(), North);
    assert_eq!(Southeast.opposite(), Northwest);
    assert_eq!(Southwest.opposite(), Northeast);
}

#[test]
fn test_iter() {
    use Direction::*;
    let directions: Vec<Direction> = Direction::iter().collect();
    assert_eq!(directions.len(), 6);
    for dir in &[Northeast, Northwest, North, South, Southeast, Southwest] {
        assert!(directions.contains(dir));
    }
}

#[test]
fn test_step_even_row() {
    // row 0 is even; northeast/southeast do not shift column, northwest/southwest shift left
    let origin = Position::new(2, 2);
    assert_eq!(Direction::North.step(origin), Some(Position::new(0, 2)));
    assert_eq!(Direction::South.step(origin), Some(Position::new(4, 2)));
    assert_eq!(Direction::Northeast.step(origin), Some(Position::new(1, 2)));
    assert_eq!(Direction::Northwest.step(origin), Some(Position::new(1, 1)));
    assert_eq!(Direction::Southeast.step(origin), Some(Position::new(3, 2)));
    assert_eq!(Direction::Southwest.step(origin), Some(Position::new(3, 1)));
}

#[test]
fn test_step_odd_row() {
    let origin = Position::new(1, 2);
    assert_eq!(Direction::Northeast.step(origin), Some(Position::new(0, 3)));
    assert_eq!(Direction::Northwest.step(origin), Some(Position::new(0, 2)));
    assert_eq!(Direction::Southeast.step(origin), Some(Position::new(2, 3)));
    assert_eq!(Direction::Southwest.step(origin), Some(Position::new(2, 2)));
}

#[test]
fn test_step_out_of_bounds() {
    let origin = Position::new(0, 0);
    assert_eq!(Direction::North.step(origin), None);
    assert_eq!(Direction::Northwest.step(origin), None);
}
