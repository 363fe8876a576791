pub mod console;
pub mod core;

// module re-exports
pub use crate::core::definitions::{Cell, Color, Figure, MatchInterface, Position};
pub use crate::core::engine::{Board, Piece};
pub use crate::core::error::{BoardError, MoveError, MoveResult, TurnError};
pub use crate::core::game::{validate_and_apply, Game, Turn};
