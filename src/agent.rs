//! The `Player` trait is the referee's only window into an external
//! agent: assign it a color, ask it for a placement or a turn action,
//! and tell it when it has been disqualified. Nothing about how an
//! agent is implemented - in-process strategy, remote connection,
//! test double - leaks past this boundary.
use crate::common::action::Action;
use crate::common::game_state::GameState;
use crate::common::game_tree::GameTree;
use crate::common::player_state::PlayerColor;
use crate::common::position::Position;
use crate::strategy::{actor, placer};

/// An external Fish-playing agent. Every method may be invoked under a
/// timeout by the referee (see `crate::referee`); a method that panics,
/// blocks past its deadline, or returns `None` is all treated the same
/// way by the referee - as a failure to respond.
///
/// `Send` is required because the referee bounds each call on a
/// detached worker thread (see `crate::referee::timeout`).
pub trait Player: Send {
    /// Informs the agent of the color it has been assigned for this
    /// match. Returns `None` to decline (equivalent to not responding).
    fn assign_color(&mut self, color: PlayerColor) -> Option<()>;

    /// Asks the agent where to place its next penguin.
    fn place_penguin(&mut self, state: &GameState) -> Option<Position>;

    /// Asks the agent what to do on its turn.
    fn take_turn(&mut self, tree: &GameTree) -> Option<Action>;

    /// One-way notice that this agent has been removed from the match.
    /// The referee does not act on the outcome of this call; it exists
    /// so a well-behaved agent can clean up or log the fact.
    fn inform_disqualified(&mut self);
}

/// A reference agent that plays with the crate's own built-in
/// strategies: the scanning placer for phase 2, and the depth-bounded
/// minimax actor for phase 3. Used by the demo binary and by the
/// referee's own test suite.
pub struct InHouseAgent {
    color: Option<PlayerColor>,
    lookahead: usize,
}

impl InHouseAgent {
    /// Creates an agent that searches `lookahead` of its own plies deep
    /// when choosing a turn action.
    pub fn new(lookahead: usize) -> InHouseAgent {
        InHouseAgent { color: None, lookahead }
    }
}

impl Player for InHouseAgent {
    fn assign_color(&mut self, color: PlayerColor) -> Option<()> {
        self.color = Some(color);
        Some(())
    }

    fn place_penguin(&mut self, state: &GameState) -> Option<Position> {
        placer::choose_placement(state)
    }

    fn take_turn(&mut self, tree: &GameTree) -> Option<Action> {
        Some(actor::choose_action(tree.state(), self.lookahead))
    }

    fn inform_disqualified(&mut self) {
        log::info!("{:?} received disqualification notice", self.color);
    }
}
