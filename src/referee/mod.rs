//! The referee drives one complete match: it assigns colors, runs the
//! placement rotation, runs the turn phase over a lazy `GameTree`,
//! disqualifies misbehaving or unresponsive agents, and reports a final
//! `GameResult`. It is the only stateful component in this crate - the
//! board, game state, and game tree underneath it are all immutable
//! value types.
pub mod config;
pub mod error;
pub mod observer;
pub mod timeout;

pub use config::RefereeConfig;
pub use error::RefereeError;
pub use observer::{Event, Observer};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::agent::Player;
use crate::common::action::Action;
use crate::common::board::Board;
use crate::common::game_state::GameState;
use crate::common::game_tree::GameTree;
use crate::common::player_state::PlayerColor;

/// The outcome of a completed match. `failed` and `cheaters` are in
/// most-recent-disqualification-first order; that relative order is
/// not part of the contract (see the referee's Open Question on this),
/// only the set of colors in each list is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winners: Vec<PlayerColor>,
    pub non_winners: Vec<PlayerColor>,
    pub failed: Vec<PlayerColor>,
    pub cheaters: Vec<PlayerColor>,
}

type AgentHandle = Arc<Mutex<Box<dyn Player>>>;

enum Disqualification {
    Fail,
    Cheat,
}

/// Runs exactly one match. Construct with a `RefereeConfig`, optionally
/// register observers, then call `run_match` once; the referee is
/// single-use.
pub struct Referee {
    config: RefereeConfig,
    current_state: Option<GameState>,
    failed: Vec<PlayerColor>,
    cheaters: Vec<PlayerColor>,
    observers: Vec<Box<dyn Observer>>,
}

impl Referee {
    pub fn new(config: RefereeConfig) -> Referee {
        Referee {
            config,
            current_state: None,
            failed: Vec::new(),
            cheaters: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer. If a match is already in progress, it is
    /// sent a `Register` event with the current state before joining
    /// the fan-out list; if that delivery misses its budget, the
    /// observer is never added.
    pub fn register_observer(&mut self, mut observer: Box<dyn Observer>) {
        match self.current_state.clone() {
            Some(state) => {
                let event = Event::Register(state);
                let timeout = self.config.observer_timeout;
                let delivered = timeout::run_with_deadline(timeout, move || {
                    observer.on_event(&event);
                    observer
                });
                match delivered {
                    Some(observer) => self.observers.push(observer),
                    None => log::warn!("observer dropped before registration completed"),
                }
            }
            None => self.observers.push(observer),
        }
    }

    /// Runs a complete match to completion, returning the final result.
    /// Returns `RefereeError` if the player count or board shape are
    /// unusable; no agent is contacted in that case.
    pub fn run_match(&mut self, players: Vec<Box<dyn Player>>) -> Result<GameResult, RefereeError> {
        if !(2..=4).contains(&players.len()) {
            return Err(RefereeError::InvalidPlayerCount(players.len()));
        }

        let board = Board::new(self.config.board.clone());
        let quota = 6 - players.len();
        let required = quota * players.len();
        let available = board.non_hole_tile_count();
        if available < required {
            return Err(RefereeError::BoardTooSmall { available, required, players: players.len() });
        }

        log::info!("starting match with {} players", players.len());

        let colors: Vec<PlayerColor> = PlayerColor::iter().take(players.len()).collect();
        let agents: HashMap<PlayerColor, AgentHandle> = colors
            .iter()
            .copied()
            .zip(players.into_iter().map(|player| Arc::new(Mutex::new(player))))
            .collect();

        let agents = self.assign_colors(&colors, agents);
        if agents.is_empty() {
            log::warn!("every player failed color assignment, ending the match immediately");
            let result = GameResult {
                winners: Vec::new(),
                non_winners: Vec::new(),
                failed: self.failed.clone(),
                cheaters: self.cheaters.clone(),
            };
            self.emit(Event::EndOfGame(result.clone()));
            return Ok(result);
        }

        let seated: Vec<PlayerColor> = colors.into_iter().filter(|color| agents.contains_key(color)).collect();
        let state = GameState::new(seated, board);
        self.current_state = Some(state.clone());

        let (state, agents) = self.run_placement(state, agents)?;
        if agents.is_empty() {
            return Ok(self.finish(state));
        }

        let (state, _agents) = self.run_turns(state, agents)?;
        Ok(self.finish(state))
    }

    fn call_agent<T, F>(agent: &AgentHandle, timeout: std::time::Duration, f: F) -> Option<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn Player) -> T + Send + 'static,
    {
        let agent = Arc::clone(agent);
        timeout::run_with_deadline(timeout, move || {
            let mut guard = match agent.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            f(&mut **guard)
        })
    }

    /// Phase 1: asks every agent to accept its color in turn order.
    /// Survivors keep their agent handle; failures are disqualified.
    fn assign_colors(
        &mut self,
        colors: &[PlayerColor],
        mut agents: HashMap<PlayerColor, AgentHandle>,
    ) -> HashMap<PlayerColor, AgentHandle> {
        log::info!("entering color assignment phase");
        let timeout = self.config.color_assignment_timeout;
        let mut surviving = HashMap::new();

        for &color in colors {
            let agent = match agents.remove(&color) {
                Some(agent) => agent,
                None => continue,
            };
            let ack = Self::call_agent(&agent, timeout, move |player| player.assign_color(color)).flatten();
            match ack {
                Some(()) => {
                    log::info!("{:?} accepted its color assignment", color);
                    surviving.insert(color, agent);
                }
                None => self.disqualify(&agent, color, Disqualification::Fail),
            }
        }

        surviving
    }

    /// Phase 2: the placement rotation. Stops once every seated player
    /// is at quota, or every player has been disqualified.
    fn run_placement(
        &mut self,
        mut state: GameState,
        mut agents: HashMap<PlayerColor, AgentHandle>,
    ) -> Result<(GameState, HashMap<PlayerColor, AgentHandle>), RefereeError> {
        log::info!("entering placement phase");
        let quota = state.penguins_per_player();

        while !state.all_penguins_placed() && !agents.is_empty() {
            let color = state
                .current_color()
                .ok_or_else(|| RefereeError::Invariant("no current player during placement".into()))?;

            let at_quota = state.player(color).map_or(true, |player| player.penguins.len() >= quota);
            if at_quota {
                state = state.rotate_to_next_player();
                continue;
            }

            let agent = agents
                .get(&color)
                .cloned()
                .ok_or_else(|| RefereeError::Invariant(format!("{:?} has no registered agent", color)))?;

            let timeout = self.config.placement_timeout;
            let state_for_call = state.clone();
            let response =
                Self::call_agent(&agent, timeout, move |player| player.place_penguin(&state_for_call)).flatten();

            let placed = response.and_then(|position| state.place_penguin(color, position).ok().map(|s| (position, s)));

            match placed {
                Some((position, next_state)) => {
                    state = next_state.rotate_to_next_player();
                    self.current_state = Some(state.clone());
                    self.emit(Event::PenguinPlacement(position));
                }
                None => {
                    agents.remove(&color);
                    state = state.remove_current_player();
                    self.current_state = Some(state.clone());
                    self.disqualify(&agent, color, Disqualification::Fail);
                }
            }
        }

        Ok((state, agents))
    }

    /// Phase 3: the turn rotation over a lazy `GameTree`. Stops once the
    /// tree is terminal, or every player has been disqualified.
    fn run_turns(
        &mut self,
        state: GameState,
        mut agents: HashMap<PlayerColor, AgentHandle>,
    ) -> Result<(GameState, HashMap<PlayerColor, AgentHandle>), RefereeError> {
        log::info!("entering turn phase");
        let mut tree = GameTree::new(state);

        loop {
            if tree.is_game_over() || agents.is_empty() {
                return Ok((tree.take_state(), agents));
            }

            let actions: Vec<Action> = match &tree {
                GameTree::Turn { children, .. } => children.keys().copied().collect(),
                GameTree::End(_) => unreachable!("handled above"),
            };

            if actions == [Action::Skip] {
                log::info!("no legal move available, auto-advancing with Skip");
                self.emit(Event::TurnAction(Action::Skip));
                tree = tree
                    .take_game_after_action(Action::Skip)
                    .expect("Skip must be a valid child when it is the only one");
                self.current_state = Some(tree.state().clone());
                continue;
            }

            let color = tree
                .state()
                .current_color()
                .ok_or_else(|| RefereeError::Invariant("no current player during turn phase".into()))?;
            let agent = agents
                .get(&color)
                .cloned()
                .ok_or_else(|| RefereeError::Invariant(format!("{:?} has no registered agent", color)))?;

            let timeout = self.config.turn_timeout;
            let state_for_call = tree.state().clone();
            let response = Self::call_agent(&agent, timeout, move |player| {
                let snapshot = GameTree::new(state_for_call);
                player.take_turn(&snapshot)
            })
            .flatten();

            match response {
                Some(action) if actions.contains(&action) => {
                    self.emit(Event::TurnAction(action));
                    tree = tree.take_game_after_action(action).expect("action was validated against this tree's children");
                    self.current_state = Some(tree.state().clone());
                }
                Some(_illegal_action) => {
                    agents.remove(&color);
                    let next_state = tree.state().remove_current_player();
                    self.disqualify(&agent, color, Disqualification::Cheat);
                    tree = GameTree::new(next_state);
                    self.current_state = Some(tree.state().clone());
                }
                None => {
                    agents.remove(&color);
                    let next_state = tree.state().remove_current_player();
                    self.disqualify(&agent, color, Disqualification::Fail);
                    tree = GameTree::new(next_state);
                    self.current_state = Some(tree.state().clone());
                }
            }
        }
    }

    /// Records a disqualification, notifies the agent (best-effort,
    /// under its own timeout), and emits a `Disqualify` event.
    fn disqualify(&mut self, agent: &AgentHandle, color: PlayerColor, category: Disqualification) {
        match category {
            Disqualification::Fail => {
                log::warn!("{:?} disqualified: failed to respond", color);
                self.failed.insert(0, color);
            }
            Disqualification::Cheat => {
                log::warn!("{:?} disqualified: returned an illegal action", color);
                self.cheaters.insert(0, color);
            }
        }

        self.emit(Event::Disqualify(color));

        let timeout = self.config.inform_disqualified_timeout;
        let _ = Self::call_agent(agent, timeout, |player| player.inform_disqualified());
    }

    /// Computes the final result from the last `GameState`, emits
    /// `EndOfGame`, and marks the match as no longer in progress.
    fn finish(&mut self, state: GameState) -> GameResult {
        let max_score = state.players().iter().map(|player| player.score).max().unwrap_or(0);
        let (winners, non_winners): (Vec<_>, Vec<_>) =
            state.players().iter().partition(|player| player.score == max_score);

        let result = GameResult {
            winners: winners.into_iter().map(|player| player.color).collect(),
            non_winners: non_winners.into_iter().map(|player| player.color).collect(),
            failed: self.failed.clone(),
            cheaters: self.cheaters.clone(),
        };

        log::info!("match finished: {} winner(s), {} failed, {} cheaters", result.winners.len(), result.failed.len(), result.cheaters.len());
        self.emit(Event::EndOfGame(result.clone()));
        self.current_state = None;
        result
    }

    /// Delivers `event` to every observer under the observer timeout,
    /// dropping any that miss their budget.
    fn emit(&mut self, event: Event) {
        let timeout = self.config.observer_timeout;
        let mut survivors = Vec::with_capacity(self.observers.len());

        for observer in self.observers.drain(..) {
            let event = event.clone();
            let delivered = timeout::run_with_deadline(timeout, move || {
                let mut observer = observer;
                observer.on_event(&event);
                observer
            });
            match delivered {
                Some(observer) => survivors.push(observer),
                None => log::warn!("observer dropped: missed its delivery budget"),
            }
        }

        self.observers = survivors;
    }
}
