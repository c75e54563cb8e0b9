//! This file represents every `GameState` reachable from some starting
//! point during the turn phase, as a lazily-evaluated tree. Nodes are
//! `Turn`s, leaves are `End`s, and branches are the legal actions out of
//! a `Turn`. See `LazyGameTree` for how the branches avoid building the
//! whole tree up front.
use std::collections::HashMap;

use crate::common::action::Action;
use crate::common::game_state::GameState;

/// Represents every state reachable from the `GameState` passed to
/// `GameTree::new`. The state does not need to be the start of a match;
/// it is "initial" only in the sense that this tree has no link back to
/// states before it.
///
/// A player with no legal move is not stuck forever - their turn is
/// skipped and play continues with the next player. The tree only ends
/// once no seated player has any legal move left.
#[derive(Debug)]
pub enum GameTree {
    Turn { state: GameState, children: HashMap<Action, LazyGameTree> },
    End(GameState),
}

impl GameTree {
    /// Builds a `GameTree` rooted at `state`.
    pub fn new(state: GameState) -> GameTree {
        if GameTree::is_terminal(&state) {
            return GameTree::End(state);
        }

        let moves = state.legal_moves_for_current_player();
        let actions: Vec<Action> = if moves.is_empty() {
            vec![Action::Skip]
        } else {
            moves.into_iter().map(|(src, dst)| Action::Move(src, dst)).collect()
        };

        let children =
            actions.into_iter().map(|action| (action, LazyGameTree::from_action(action, &state))).collect();

        GameTree::Turn { state, children }
    }

    /// A state is terminal once no seated player - not just the current
    /// one - has a legal move left.
    fn is_terminal(state: &GameState) -> bool {
        state.legal_moves_for_current_player().is_empty() && !state.any_other_player_can_move()
    }

    pub fn state(&self) -> &GameState {
        match self {
            GameTree::Turn { state, .. } => state,
            GameTree::End(state) => state,
        }
    }

    pub fn take_state(self) -> GameState {
        match self {
            GameTree::Turn { state, .. } => state,
            GameTree::End(state) => state,
        }
    }

    /// The `GameTree` reached by taking `action` from this node, forcing
    /// that branch's thunk if it hasn't been forced yet. None if
    /// `action` isn't legal here, or this node is an `End`.
    pub fn get_game_after_action(&mut self, action: Action) -> Option<&mut GameTree> {
        match self {
            GameTree::Turn { children, .. } => children.get_mut(&action).map(LazyGameTree::get_evaluated),
            GameTree::End(_) => None,
        }
    }

    pub fn take_game_after_action(self, action: Action) -> Option<GameTree> {
        match self {
            GameTree::Turn { mut children, .. } => children.remove(&action).map(LazyGameTree::evaluate),
            GameTree::End(_) => None,
        }
    }

    /// Forces every branch out of this node and applies `f` to each,
    /// returning the results keyed by the action that produced them.
    pub fn map<T, F>(&mut self, mut f: F) -> HashMap<Action, T>
    where
        F: FnMut(&mut GameTree) -> T,
    {
        match self {
            GameTree::Turn { children, .. } => children
                .iter_mut()
                .map(|(&action, lazy)| (action, f(lazy.get_evaluated())))
                .collect(),
            GameTree::End(_) => HashMap::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, GameTree::End(_))
    }
}

/// Either an already-evaluated `GameTree`, or an unevaluated thunk that
/// produces one. Branches of a `Turn` start out `Unevaluated`; forcing
/// one builds only that single child, not its descendants, which keeps
/// exploring a `GameTree` from allocating an exponential amount of
/// memory up front.
pub enum LazyGameTree {
    Evaluated(GameTree),
    Unevaluated(Box<dyn FnMut() -> GameTree>),
}

impl LazyGameTree {
    pub fn get_evaluated(&mut self) -> &mut GameTree {
        match self {
            LazyGameTree::Evaluated(tree) => tree,
            LazyGameTree::Unevaluated(thunk) => {
                let tree = thunk();
                *self = LazyGameTree::Evaluated(tree);
                self.get_evaluated()
            }
        }
    }

    pub fn evaluate(self) -> GameTree {
        match self {
            LazyGameTree::Evaluated(tree) => tree,
            LazyGameTree::Unevaluated(mut thunk) => thunk(),
        }
    }

    fn from_action(action: Action, state: &GameState) -> LazyGameTree {
        let state = state.clone();
        LazyGameTree::Unevaluated(Box::new(move || {
            let next = match action {
                Action::Move(src, dst) => {
                    state.move_penguin(src, dst).expect("GameTree built an illegal move into a thunk")
                }
                Action::Skip => state.rotate_to_next_player(),
                Action::Place(_) => unreachable!("GameTree only models the turn phase, never placement"),
            };
            GameTree::new(next)
        }))
    }
}

impl std::fmt::Debug for LazyGameTree {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LazyGameTree::Evaluated(tree) => write!(f, "Evaluated({:?})", tree),
            LazyGameTree::Unevaluated(_) => write!(f, "Unevaluated(_)"),
        }
    }
}
