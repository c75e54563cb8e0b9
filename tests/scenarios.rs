//! End-to-end scenarios driving a `Referee` through full matches against
//! well-behaved and misbehaving agents.
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use fish::common::action::Action;
use fish::common::board::BoardConfig;
use fish::common::game_state::GameState;
use fish::common::game_tree::GameTree;
use fish::common::player_state::PlayerColor;
use fish::common::position::Position;
use fish::referee::{Event, Observer};
use fish::{InHouseAgent, Player, Referee, RefereeConfig};

fn fast_config(board: BoardConfig) -> RefereeConfig {
    RefereeConfig {
        board,
        color_assignment_timeout: Duration::from_millis(150),
        placement_timeout: Duration::from_millis(150),
        turn_timeout: Duration::from_millis(150),
        inform_disqualified_timeout: Duration::from_millis(150),
        observer_timeout: Duration::from_millis(150),
    }
}

/// Places normally but always proposes an out-of-bounds move on every
/// turn, regardless of the board.
struct FirstTurnCheater;

impl Player for FirstTurnCheater {
    fn assign_color(&mut self, _color: PlayerColor) -> Option<()> {
        Some(())
    }

    fn place_penguin(&mut self, state: &GameState) -> Option<Position> {
        fish::strategy::placer::choose_placement(state)
    }

    fn take_turn(&mut self, _tree: &GameTree) -> Option<Action> {
        Some(Action::Move(Position::new(2, 2), Position::new(u32::MAX, u32::MAX)))
    }

    fn inform_disqualified(&mut self) {}
}

/// Accepts its color but never returns from `place_penguin`.
struct HangingPlacer;

impl Player for HangingPlacer {
    fn assign_color(&mut self, _color: PlayerColor) -> Option<()> {
        Some(())
    }

    fn place_penguin(&mut self, _state: &GameState) -> Option<Position> {
        thread::sleep(Duration::from_millis(500));
        None
    }

    fn take_turn(&mut self, tree: &GameTree) -> Option<Action> {
        Some(fish::strategy::actor::choose_action(tree.state(), 1))
    }

    fn inform_disqualified(&mut self) {}
}

/// Fails every call; used to confirm the referee never contacts an
/// agent when a match is rejected up front.
struct NeverCalledAgent;

impl Player for NeverCalledAgent {
    fn assign_color(&mut self, _color: PlayerColor) -> Option<()> {
        panic!("should never be contacted")
    }

    fn place_penguin(&mut self, _state: &GameState) -> Option<Position> {
        panic!("should never be contacted")
    }

    fn take_turn(&mut self, _tree: &GameTree) -> Option<Action> {
        panic!("should never be contacted")
    }

    fn inform_disqualified(&mut self) {
        panic!("should never be contacted")
    }
}

struct RecordingObserver {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Observer for RecordingObserver {
    fn on_event(&mut self, event: &Event) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Hangs past its delivery budget on every event; used to confirm a slow
/// observer is dropped without affecting the match or other observers.
struct HangingObserver;

impl Observer for HangingObserver {
    fn on_event(&mut self, _event: &Event) {
        thread::sleep(Duration::from_millis(500));
    }
}

#[test]
fn s1_two_players_uniform_board_ends_with_no_disqualifications() {
    let config = fast_config(BoardConfig::Uniform { height: 3, width: 3, fish_per_tile: 1 });
    let mut referee = Referee::new(config);
    let players: Vec<Box<dyn Player>> = vec![Box::new(InHouseAgent::new(1)), Box::new(InHouseAgent::new(1))];

    let result = referee.run_match(players).unwrap();

    assert!(result.failed.is_empty());
    assert!(result.cheaters.is_empty());
    assert_eq!(result.winners.len() + result.non_winners.len(), 2);
    assert!(!result.winners.is_empty());
}

#[test]
fn s2_player_that_cheats_on_its_first_turn_is_disqualified_and_the_other_wins() {
    let config = fast_config(BoardConfig::Uniform { height: 3, width: 3, fish_per_tile: 1 });
    let mut referee = Referee::new(config);
    let players: Vec<Box<dyn Player>> = vec![Box::new(FirstTurnCheater), Box::new(InHouseAgent::new(1))];

    let result = referee.run_match(players).unwrap();

    assert_eq!(result.cheaters, vec![PlayerColor::Red]);
    assert!(result.failed.is_empty());
    assert_eq!(result.winners, vec![PlayerColor::White]);
}

#[test]
fn s3_a_hanging_placer_is_failed_and_the_match_continues_with_the_frozen_quota() {
    let config = fast_config(BoardConfig::Uniform { height: 4, width: 4, fish_per_tile: 1 });
    let mut referee = Referee::new(config);
    let players: Vec<Box<dyn Player>> = vec![
        Box::new(InHouseAgent::new(1)),
        Box::new(HangingPlacer),
        Box::new(InHouseAgent::new(1)),
    ];

    let result = referee.run_match(players).unwrap();

    assert_eq!(result.failed, vec![PlayerColor::White]);
    assert!(result.cheaters.is_empty());
    assert_eq!(result.winners.len() + result.non_winners.len(), 2);
}

#[test]
fn s4_a_board_with_no_legal_moves_after_placement_ends_in_an_all_way_tie() {
    // 8 non-hole tiles, all in row 0; every hex direction out of a row-0
    // tile lands on row 1 (all holes) or out of bounds, so no placement
    // has a legal move once the board fills.
    let board = BoardConfig::Explicit {
        rows: vec![vec![1, 1, 1, 1, 1, 1, 1, 1], vec![0, 0, 0, 0, 0, 0, 0, 0], vec![0, 0, 0, 0, 0, 0, 0, 0]],
    };
    let config = fast_config(board);
    let mut referee = Referee::new(config);
    let players: Vec<Box<dyn Player>> = (0..4).map(|_| Box::new(InHouseAgent::new(1)) as Box<dyn Player>).collect();

    let result = referee.run_match(players).unwrap();

    assert!(result.failed.is_empty());
    assert!(result.cheaters.is_empty());
    assert_eq!(result.winners.len(), 4);
    assert!(result.non_winners.is_empty());
}

#[test]
fn s5_a_hanging_observer_is_dropped_without_affecting_the_match_or_other_observers() {
    let config = fast_config(BoardConfig::Uniform { height: 3, width: 3, fish_per_tile: 1 });
    let mut referee = Referee::new(config);

    let recorded = Arc::new(Mutex::new(Vec::new()));
    referee.register_observer(Box::new(RecordingObserver { events: Arc::clone(&recorded) }));
    referee.register_observer(Box::new(HangingObserver));

    let players: Vec<Box<dyn Player>> = vec![Box::new(InHouseAgent::new(1)), Box::new(InHouseAgent::new(1))];
    let result = referee.run_match(players).unwrap();

    let events = recorded.lock().unwrap();
    assert!(!events.is_empty());
    assert_eq!(events.last(), Some(&Event::EndOfGame(result)));
}

#[test]
fn s6_an_out_of_range_player_count_is_rejected_before_any_agent_is_contacted() {
    let config = fast_config(BoardConfig::Uniform { height: 5, width: 5, fish_per_tile: 3 });
    let mut referee = Referee::new(config);
    let players: Vec<Box<dyn Player>> = vec![Box::new(NeverCalledAgent)];

    let err = referee.run_match(players).unwrap_err();
    assert!(matches!(err, fish::referee::RefereeError::InvalidPlayerCount(1)));
}
