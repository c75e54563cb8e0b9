//! A turn-phase strategy: a depth-bounded minimax search that picks the
//! move maximizing the acting player's own score, assuming every other
//! player moves to minimize it.
use std::collections::HashMap;

use crate::common::action::Action;
use crate::common::game_state::GameState;
use crate::common::game_tree::GameTree;
use crate::common::player_state::PlayerColor;
use crate::common::util::{all_max_by_key, all_min_by_key};

/// Looks `lookahead` of the acting player's own turns into the future
/// and returns the best action for them to take right now.
///
/// Panics if it is not `state`'s current player's turn to act, or if
/// the game is already over.
pub fn choose_action(state: &GameState, lookahead: usize) -> Action {
    let for_player = state.current_color().expect("the game is over, there is no move to make");
    let mut tree = GameTree::new(state.clone());
    let (_, mut history) = best_score_and_actions(&mut tree, for_player, lookahead);
    history.pop().expect("the game is over, there is no move to make")
}

/// Searches `tree` for the path of actions that best serves `for_player`,
/// returning their resulting score and the actions taken to reach it, in
/// reverse order (the first action taken occurs last in the Vec).
///
/// Lookahead is counted in `for_player`'s own turns, so it only
/// decreases when the tree's current node is their turn to act.
fn best_score_and_actions(
    tree: &mut GameTree,
    for_player: PlayerColor,
    lookahead: usize,
) -> (usize, Vec<Action>) {
    let is_players_turn = tree.state().current_color() == Some(for_player);

    if tree.is_game_over() || (lookahead == 0 && is_players_turn) {
        let score = tree.state().player(for_player).map_or(0, |player| player.score);
        return (score, Vec::new());
    }

    let lookahead = lookahead - usize::from(is_players_turn);

    let outcomes = tree.map(|child| best_score_and_actions(child, for_player, lookahead));
    let (action, (score, mut history)) = pick_best(is_players_turn, outcomes);
    history.push(action);
    (score, history)
}

/// Picks the action that maximizes `for_player`'s score on their own
/// turn, or minimizes it on anyone else's. Ties are broken by the
/// action's own ordering, which is exactly the lowest-source-then-lowest-
/// destination rule (`Skip` sorts last, so it is only chosen when it is
/// the only option).
fn pick_best(maximize: bool, outcomes: HashMap<Action, (usize, Vec<Action>)>) -> (Action, (usize, Vec<Action>)) {
    let best_scoring = if maximize {
        all_max_by_key(outcomes.into_iter(), |(_, (score, _))| *score)
    } else {
        all_min_by_key(outcomes.into_iter(), |(_, (score, _))| *score)
    };

    all_min_by_key(best_scoring, |(action, _)| *action).next().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::board::Board;
    use crate::common::position::Position;

    // 3 rows x 5 cols, 3 fish per tile, zigzag-placed penguins for 2 players:
    //  p1    p2    p1    p2    p1
    //     p2    p1    p2    .     .
    //  .     .     .     .     .
    fn zigzag_placed_state() -> GameState {
        let board = Board::with_no_holes(3, 5, 3);
        let mut state = GameState::new(vec![PlayerColor::Red, PlayerColor::White], board);
        loop {
            let color = match state.current_color() {
                Some(color) => color,
                None => break,
            };
            if state.all_penguins_placed() {
                break;
            }
            match crate::strategy::placer::choose_placement(&state) {
                Some(position) => {
                    state = state.place_penguin(color, position).unwrap();
                    state = state.rotate_to_next_player();
                }
                None => break,
            }
        }
        state
    }

    #[test]
    fn test_choose_action_one_turn_lookahead_picks_lowest_tied_move() {
        let state = zigzag_placed_state();
        // Every tile carries 3 fish, so every move ties on score and the
        // search falls back to the lowest (src, dst) pair. Red's penguin
        // at (0, 0) is boxed in on every side but south, so that's the
        // lowest-sorting move available.
        let action = choose_action(&state, 1);
        assert_eq!(action, Action::Move(Position::new(0, 0), Position::new(2, 0)));
    }

    #[test]
    fn test_choose_action_prefers_the_higher_value_source_tile() {
        // A move's score comes from the tile the penguin leaves, not the
        // one it lands on. With one penguin on a 1-fish tile and another
        // on a 5-fish tile, a one-turn lookahead should move the 5-fish
        // penguin even though its own lowest destination isn't the
        // lexicographically smallest move overall.
        let board = Board::from_rows(vec![vec![1, 5], vec![1, 1], vec![1, 1]]);
        let mut state = GameState::new(vec![PlayerColor::Red], board);
        state = state.place_penguin(PlayerColor::Red, Position::new(0, 0)).unwrap();
        state = state.place_penguin(PlayerColor::Red, Position::new(0, 1)).unwrap();

        let action = choose_action(&state, 1);
        assert_eq!(action, Action::Move(Position::new(0, 1), Position::new(1, 0)));
    }
}
