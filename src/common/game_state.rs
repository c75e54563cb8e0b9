//! The game_state module defines the `GameState`: an immutable snapshot
//! of one point in a Fish match used both to validate a single action
//! and as the value type threaded through the referee and the game
//! tree. Every mutating-looking method here takes `&self` and returns a
//! new `GameState`; nothing is mutated in place.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::board::Board;
use crate::common::penguin::Penguin;
use crate::common::player_state::{PlayerColor, PlayerState};
use crate::common::position::Position;

/// A rule violation raised by a `GameState` operation. The referee turns
/// these into `Cheat` or `Fail` disqualifications depending on which
/// phase produced them (see `Referee`); nothing in this module knows
/// about disqualification policy.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("{0:?} is not a seated player")]
    UnknownColor(PlayerColor),
    #[error("{0:?} is out of bounds")]
    OutOfBounds(Position),
    #[error("{0:?} is a hole")]
    Hole(Position),
    #[error("{0:?} is already occupied")]
    Occupied(Position),
    #[error("{0:?} has no penguin to move")]
    NoPenguinAt(Position),
    #[error("{1:?} is not reachable from {0:?}")]
    Unreachable(Position, Position),
}

/// An immutable snapshot of a Fish match in progress: the board, the
/// ordered seated players, and whose turn it currently is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: Vec<PlayerState>,
    current_turn: usize,

    /// `6 - (number of players at the start of the match)`, fixed for
    /// the lifetime of this match regardless of later disqualifications.
    penguins_per_player: usize,
}

impl GameState {
    /// Creates the starting `GameState` for a match seating the given
    /// colors, in order, on the given board. `colors` must be non-empty
    /// and contain no duplicates; both are the referee's responsibility
    /// to guarantee before a match starts.
    pub fn new(colors: Vec<PlayerColor>, board: Board) -> GameState {
        debug_assert!(!colors.is_empty());
        debug_assert!({
            let mut sorted = colors.clone();
            sorted.dedup();
            sorted.len() == colors.len()
        });

        let penguins_per_player = 6 - colors.len();
        let players = colors.into_iter().map(PlayerState::new).collect();

        GameState { board, players, current_turn: 0, penguins_per_player }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn penguins_per_player(&self) -> usize {
        self.penguins_per_player
    }

    /// The player whose turn it currently is, or None if every player
    /// has been disqualified.
    pub fn current_player(&self) -> Option<&PlayerState> {
        self.players.get(self.current_turn)
    }

    pub fn current_color(&self) -> Option<PlayerColor> {
        self.current_player().map(|player| player.color)
    }

    pub fn player(&self, color: PlayerColor) -> Option<&PlayerState> {
        self.players.iter().find(|player| player.color == color)
    }

    /// True once every seated player holds `penguins_per_player` penguins.
    pub fn all_penguins_placed(&self) -> bool {
        self.players.iter().all(|player| player.penguins.len() >= self.penguins_per_player)
    }

    /// Every position currently occupied by any player's penguin.
    pub fn occupied_positions(&self) -> HashSet<Position> {
        self.players.iter().flat_map(|player| player.penguin_positions()).collect()
    }

    /// A view of the board where every tile under a penguin is a hole.
    /// Used by strategies that need to know which tiles are free to land
    /// on independent of whose turn it is.
    pub fn board_minus_penguins(&self) -> Board {
        self.occupied_positions()
            .iter()
            .fold(self.board.clone(), |board, &position| board.remove_tile(position))
    }

    /// Places a new penguin for `color` at `position`. Does not advance
    /// the turn cursor; the caller (the referee, in rotation) is
    /// responsible for calling `rotate_to_next_player` afterward.
    pub fn place_penguin(&self, color: PlayerColor, position: Position) -> Result<GameState, RuleViolation> {
        if !self.board.in_bounds(position) {
            return Err(RuleViolation::OutOfBounds(position));
        }
        if self.board.get_tile(position).map_or(true, |tile| tile.is_hole()) {
            return Err(RuleViolation::Hole(position));
        }
        if self.occupied_positions().contains(&position) {
            return Err(RuleViolation::Occupied(position));
        }
        if !self.players.iter().any(|player| player.color == color) {
            return Err(RuleViolation::UnknownColor(color));
        }

        let mut state = self.clone();
        let player = state.players.iter_mut().find(|player| player.color == color).unwrap();
        player.penguins.push(Penguin::new(position));
        Ok(state)
    }

    /// Moves the current player's penguin at `src` to `dst`, crediting
    /// the fish on `src` to that player's score, turning `src` into a
    /// hole, and advancing the turn cursor to the next seated player.
    pub fn move_penguin(&self, src: Position, dst: Position) -> Result<GameState, RuleViolation> {
        if !self.board.in_bounds(src) {
            return Err(RuleViolation::OutOfBounds(src));
        }
        if !self.board.in_bounds(dst) {
            return Err(RuleViolation::OutOfBounds(dst));
        }

        let current_index = self.current_turn;
        let current = self.players.get(current_index).ok_or(RuleViolation::NoPenguinAt(src))?;
        if !current.has_penguin_at(src) {
            return Err(RuleViolation::NoPenguinAt(src));
        }

        let occupied = self.occupied_positions();
        let reachable = self.board.reachable_from(src, &occupied);
        if !reachable.contains(&dst) {
            return Err(RuleViolation::Unreachable(src, dst));
        }

        let fish_caught = self.board.get_tile(src).map_or(0, |tile| tile.fish_count());

        let mut state = self.clone();
        {
            let player = &mut state.players[current_index];
            player.score += fish_caught as usize;
            let penguin = player.penguins.iter_mut().find(|p| p.position == src).unwrap();
            penguin.position = dst;
        }
        state.board = state.board.remove_tile(src);
        Ok(state.rotate_to_next_player())
    }

    /// Advances the turn cursor to the next seated player, wrapping
    /// around the player list.
    pub fn rotate_to_next_player(&self) -> GameState {
        let mut state = self.clone();
        if !state.players.is_empty() {
            state.current_turn = (state.current_turn + 1) % state.players.len();
        }
        state
    }

    /// Removes the current player (and their penguins) from the match.
    /// The tiles under the removed penguins become holes, since a
    /// disqualified player's penguins are forfeit along with any fish
    /// still under them.
    pub fn remove_current_player(&self) -> GameState {
        let mut state = self.clone();
        if state.players.is_empty() {
            return state;
        }

        let removed = state.players.remove(state.current_turn);
        for position in removed.penguin_positions() {
            state.board = state.board.remove_tile(position);
        }

        if state.players.is_empty() {
            state.current_turn = 0;
        } else {
            state.current_turn %= state.players.len();
        }
        state
    }

    /// All `(src, dst)` moves the current player can legally make.
    pub fn legal_moves_for_current_player(&self) -> Vec<(Position, Position)> {
        let current = match self.current_player() {
            Some(player) => player,
            None => return Vec::new(),
        };
        let occupied = self.occupied_positions();

        let mut moves = Vec::new();
        for &src in &current.penguin_positions().collect::<Vec<_>>() {
            for dst in self.board.reachable_from(src, &occupied) {
                moves.push((src, dst));
            }
        }
        moves
    }

    /// True if any seated player other than the current one can move at
    /// least one penguin.
    pub fn any_other_player_can_move(&self) -> bool {
        let occupied = self.occupied_positions();
        self.players.iter().enumerate().any(|(i, player)| {
            i != self.current_turn
                && player
                    .penguin_positions()
                    .any(|pos| !self.board.reachable_from(pos, &occupied).is_empty())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(n: usize) -> Vec<PlayerColor> {
        PlayerColor::iter().take(n).collect()
    }

    #[test]
    fn test_new_assigns_colors_in_order() {
        let state = GameState::new(colors(3), Board::with_no_holes(3, 3, 1));
        assert_eq!(state.players()[0].color, PlayerColor::Red);
        assert_eq!(state.players()[1].color, PlayerColor::White);
        assert_eq!(state.players()[2].color, PlayerColor::Brown);
        assert_eq!(state.penguins_per_player(), 3);
    }

    #[test]
    fn test_place_penguin_appends_to_player() {
        let state = GameState::new(colors(2), Board::with_no_holes(3, 3, 1));
        let state = state.place_penguin(PlayerColor::Red, Position::new(0, 0)).unwrap();
        assert_eq!(state.player(PlayerColor::Red).unwrap().penguins.last().unwrap().position, Position::new(0, 0));
    }

    #[test]
    fn test_place_penguin_rejects_out_of_bounds() {
        let state = GameState::new(colors(2), Board::with_no_holes(2, 2, 1));
        let err = state.place_penguin(PlayerColor::Red, Position::new(9, 9)).unwrap_err();
        assert_eq!(err, RuleViolation::OutOfBounds(Position::new(9, 9)));
    }

    #[test]
    fn test_place_penguin_rejects_hole() {
        let board = Board::with_no_holes(2, 2, 1).remove_tile(Position::new(0, 0));
        let state = GameState::new(colors(2), board);
        let err = state.place_penguin(PlayerColor::Red, Position::new(0, 0)).unwrap_err();
        assert_eq!(err, RuleViolation::Hole(Position::new(0, 0)));
    }

    #[test]
    fn test_place_penguin_rejects_occupied() {
        let state = GameState::new(colors(2), Board::with_no_holes(2, 2, 1));
        let state = state.place_penguin(PlayerColor::Red, Position::new(0, 0)).unwrap();
        let err = state.place_penguin(PlayerColor::White, Position::new(0, 0)).unwrap_err();
        assert_eq!(err, RuleViolation::Occupied(Position::new(0, 0)));
    }

    #[test]
    fn test_place_penguin_rejects_unknown_color() {
        let state = GameState::new(colors(2), Board::with_no_holes(2, 2, 1));
        let err = state.place_penguin(PlayerColor::Black, Position::new(0, 0)).unwrap_err();
        assert_eq!(err, RuleViolation::UnknownColor(PlayerColor::Black));
    }

    #[test]
    fn test_move_penguin_scores_and_advances_turn() {
        // 5x1 column board, all 3-fish tiles.
        let board = Board::with_no_holes(5, 1, 3);
        let state = GameState::new(colors(2), board);
        let state = state.place_penguin(PlayerColor::Red, Position::new(2, 0)).unwrap();
        let state = state.place_penguin(PlayerColor::White, Position::new(4, 0)).unwrap();
        // It's still Red's turn (place_penguin doesn't rotate).
        assert_eq!(state.current_color(), Some(PlayerColor::Red));

        let state = state.move_penguin(Position::new(2, 0), Position::new(0, 0)).unwrap();
        assert_eq!(state.player(PlayerColor::Red).unwrap().score, 3);
        assert!(state.board().get_tile(Position::new(2, 0)).unwrap().is_hole());
        assert_eq!(state.current_color(), Some(PlayerColor::White));
    }

    #[test]
    fn test_move_penguin_rejects_unreachable() {
        let board = Board::with_no_holes(3, 3, 1);
        let state = GameState::new(colors(2), board);
        let state = state.place_penguin(PlayerColor::Red, Position::new(0, 0)).unwrap();
        let err = state.move_penguin(Position::new(0, 0), Position::new(2, 2)).unwrap_err();
        assert!(matches!(err, RuleViolation::Unreachable(_, _)));
    }

    #[test]
    fn test_move_penguin_rejects_no_penguin_at_src() {
        let state = GameState::new(colors(2), Board::with_no_holes(3, 3, 1));
        let err = state.move_penguin(Position::new(0, 0), Position::new(0, 1)).unwrap_err();
        assert_eq!(err, RuleViolation::NoPenguinAt(Position::new(0, 0)));
    }

    #[test]
    fn test_rotate_to_next_player_wraps() {
        let state = GameState::new(colors(3), Board::with_no_holes(2, 2, 1));
        let mut s = state.clone();
        for _ in 0..3 {
            s = s.rotate_to_next_player();
        }
        assert_eq!(s.current_turn, state.current_turn);
    }

    #[test]
    fn test_remove_current_player_holes_its_tiles() {
        let board = Board::with_no_holes(3, 3, 2);
        let state = GameState::new(colors(2), board);
        let state = state.place_penguin(PlayerColor::Red, Position::new(0, 0)).unwrap();
        let state = state.remove_current_player();
        assert_eq!(state.players().len(), 1);
        assert_eq!(state.players()[0].color, PlayerColor::White);
        assert!(state.board().get_tile(Position::new(0, 0)).unwrap().is_hole());
    }

    #[test]
    fn test_board_minus_penguins() {
        let board = Board::with_no_holes(2, 2, 1);
        let state = GameState::new(colors(2), board);
        let state = state.place_penguin(PlayerColor::Red, Position::new(0, 0)).unwrap();
        let masked = state.board_minus_penguins();
        assert!(masked.get_tile(Position::new(0, 0)).unwrap().is_hole());
        assert!(!state.board().get_tile(Position::new(0, 0)).unwrap().is_hole());
    }

    #[test]
    fn test_json_round_trip_preserves_state() {
        let board = Board::with_no_holes(2, 2, 3);
        let state = GameState::new(colors(2), board);
        let state = state.place_penguin(PlayerColor::Red, Position::new(0, 0)).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let parsed: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_legal_moves_for_current_player() {
        let board = Board::with_no_holes(3, 1, 1);
        let state = GameState::new(colors(2), board);
        let state = state.place_penguin(PlayerColor::Red, Position::new(1, 0)).unwrap();
        let moves = state.legal_moves_for_current_player();
        assert!(moves.contains(&(Position::new(1, 0), Position::new(0, 0))));
        assert!(moves.contains(&(Position::new(1, 0), Position::new(2, 0))));
    }
}
