//! Observers receive a read-only stream of match events. An observer
//! that can't keep up with its delivery budget is dropped for the rest
//! of the match; it never affects match state either way.
use crate::common::action::Action;
use crate::common::game_state::GameState;
use crate::common::player_state::PlayerColor;
use crate::common::position::Position;
use crate::referee::GameResult;

/// A single event in a match's lifecycle, delivered to every registered
/// observer in the order the referee produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Delivered once, synchronously, to an observer that registers
    /// while a match is already in progress.
    Register(GameState),
    PenguinPlacement(Position),
    TurnAction(Action),
    Disqualify(PlayerColor),
    EndOfGame(GameResult),
}

/// An observer of a running match. Every call may be invoked under a
/// timeout by the referee; an observer that doesn't return in time is
/// dropped and receives no further events.
pub trait Observer: Send {
    fn on_event(&mut self, event: &Event);
}
