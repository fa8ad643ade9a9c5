//! Error types for odds handling and slip bookkeeping

use thiserror::Error;

/// Errors raised while constructing or combining betting lines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OddsError {
    /// A zero American line has no payout meaning.
    #[error("american odds cannot be zero")]
    ZeroOdds,

    /// Text that is not a signed integer line.
    #[error("invalid american odds: {0:?}")]
    Invalid(String),

    /// A parlay needs at least two legs.
    #[error("parlay needs at least 2 legs, got {0}")]
    NotEnoughLegs(usize),

    /// Combined price cannot be quoted as an `i32` line.
    #[error("combined line is outside the american odds range")]
    OutOfRange,
}

/// Errors raised by slip mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlipError {
    #[error("selection {0} is already on the slip")]
    Duplicate(String),

    #[error("no selection with id {0}")]
    UnknownSelection(String),

    #[error("slip is full ({0} selections)")]
    Full(usize),

    #[error("no stake entered on any selection")]
    NothingStaked,

    #[error(transparent)]
    Odds(#[from] OddsError),
}
