use thiserror::Error;

use crate::swiss::PlayerId;

pub type Result<T, E = TournamentError> = std::result::Result<T, E>;

/// Every failure a tournament operation can report to its caller.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The store could not be opened or no connection could be checked out.
    #[error("tournament store is unreachable: {0}")]
    Connectivity(#[from] r2d2::Error),

    /// A match report was rejected before touching the store.
    #[error("invalid match report: {0}")]
    Constraint(ConstraintViolation),

    #[error("not enough players to pair: {count} registered, at least 2 required")]
    InsufficientPlayers { count: usize },

    #[error("cannot pair an odd number of players: {count} registered")]
    OddPlayerCount { count: usize },

    #[error("store query failed: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    #[error("player {0} is not registered")]
    UnknownPlayer(PlayerId),
}

impl From<ConstraintViolation> for TournamentError {
    fn from(violation: ConstraintViolation) -> Self {
        TournamentError::Constraint(violation)
    }
}
