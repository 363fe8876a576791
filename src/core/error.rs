//! Error types for board access, move application and turn handling.

use thiserror::Error;

use crate::core::definitions::{Color, Position};

/// Contract violations of the raw board accessors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
}

/// Rejections of a single step or a whole step sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Destination is not a legal slide or jump for the piece, or there is no piece to move
    #[error("invalid move from {from} to {to}")]
    InvalidMove { from: Position, to: Position },

    /// A sequence of more than one step contains a slide
    #[error("no slide moves allowed in a chain of multiple moves (step {index})")]
    SlideInChain { index: usize },

    #[error("no destination was given")]
    EmptySequence,
}

/// Result type alias for move operations
pub type MoveResult<T> = Result<T, MoveError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// The selected cell is empty or holds a piece of the other player
    #[error("{color} must move one of its own pieces, {position} is not one")]
    OwnershipViolation { position: Position, color: Color },

    #[error(transparent)]
    Move(#[from] MoveError),
}
