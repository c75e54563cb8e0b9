//! Built-in strategies for the turn-based phases of a match: where to
//! place a penguin, and which move to make. These are used both by the
//! crate's reference `Player` implementations and directly in tests.
pub mod actor;
pub mod placer;
