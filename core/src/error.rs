use thiserror::Error;

use crate::{CaseIndex, Cash};

/// Rejected engine calls. None of these leave a partial mutation behind.
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum GameError {
    #[error("Case {0} is not on the board")]
    InvalidCase(CaseIndex),
    #[error("A case has already been chosen for this game")]
    CaseAlreadyChosen,
    #[error("No case has been chosen yet")]
    NoCaseChosen,
    #[error("Case {0} is the held case")]
    HeldCase(CaseIndex),
    #[error("Case {0} has already been opened")]
    CaseAlreadyOpened(CaseIndex),
    #[error("Cases cannot be opened right now")]
    NotRevealing,
    #[error("There is no offer on the table")]
    NoOfferPending,
    #[error("The final choice has not been reached")]
    NotAtFinalChoice,
    #[error("Case {0} is not one of the two remaining cases")]
    NotFinalCandidate(CaseIndex),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Prior totals have already been seeded")]
    TotalsAlreadySeeded,
    #[error("Prior totals can only be seeded before any round is settled")]
    RoundAlreadySettled,
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Malformed startup configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("At least 2 cash values are required, got {0}")]
    TooFewValues(usize),
    #[error("{0} is not a number")]
    NotANumber(String),
    #[error("{0} is a negative number")]
    NegativeValue(Cash),
    #[error("{0} is not a finite amount")]
    NonFiniteValue(Cash),
}
