//! The referee's public error surface: the handful of ways a match can
//! fail to even start, plus the fatal invariant-violation case. Agent
//! disqualification during a match is not an error - it's tracked in
//! the `GameResult` the referee returns.
use thiserror::Error;

/// Errors the referee can report. `InvalidPlayerCount` and
/// `BoardTooSmall` are both checked before any agent is contacted, so a
/// match that can't be run never touches a player's agent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefereeError {
    #[error("a match requires between 2 and 4 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("the board has only {available} non-hole tiles, but {players} players need {required} for placement")]
    BoardTooSmall { available: usize, required: usize, players: usize },

    /// An internal invariant was violated (e.g. the turn cursor
    /// disagreed with the seated player list). The referee aborts the
    /// match; the embedder should treat this as a bug report.
    #[error("internal referee invariant violated: {0}")]
    Invariant(String),
}
