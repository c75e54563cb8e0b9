//! A placement strategy for the phase 2 placement rotation: the
//! scanning placer always takes the first open tile it finds, in
//! row-major order.
use crate::common::game_state::GameState;
use crate::common::position::Position;

/// Returns the first open (non-hole, unoccupied) tile in row-major
/// order, or None if the board has no open tile left.
///
/// The referee only calls this for a player that still has unplaced
/// penguins, so a None here means the board itself has run out of room,
/// not that the player's quota is already met.
pub fn choose_placement(state: &GameState) -> Option<Position> {
    let occupied = state.occupied_positions();

    for row in 0..state.board().height {
        for col in 0..state.board().width {
            let position = Position::new(row, col);
            let open = state.board().get_tile(position).map_or(false, |tile| !tile.is_hole());
            if open && !occupied.contains(&position) {
                return Some(position);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::board::Board;
    use crate::common::player_state::PlayerColor;

    #[test]
    fn test_choose_placement_picks_first_open_tile() {
        let state = GameState::new(vec![PlayerColor::Red], Board::with_no_holes(2, 3, 1));
        assert_eq!(choose_placement(&state), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_choose_placement_skips_holes_and_occupied() {
        let board = Board::with_no_holes(1, 3, 1).remove_tile(Position::new(0, 0));
        let mut state = GameState::new(vec![PlayerColor::Red, PlayerColor::White], board);
        state = state.place_penguin(PlayerColor::Red, Position::new(0, 1)).unwrap();
        assert_eq!(choose_placement(&state), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_choose_placement_returns_none_when_board_is_full() {
        let board = Board::with_no_holes(1, 1, 1);
        let mut state = GameState::new(vec![PlayerColor::Red], board);
        state = state.place_penguin(PlayerColor::Red, Position::new(0, 0)).unwrap();
        assert_eq!(choose_placement(&state), None);
    }
}
