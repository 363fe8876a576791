use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::engine::Piece;
use crate::core::error::TurnError;

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Red,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /** Row step of a forward move: red climbs toward row 0, black descends toward row 7 */
    pub fn forward(self) -> i32 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /** Reaching this row promotes a piece to king */
    pub fn far_row(self) -> i32 {
        match self {
            Color::Red => 0,
            Color::Black => 7,
        }
    }

    pub fn starting_rows(self) -> [i32; 3] {
        match self {
            Color::Red => [5, 6, 7],
            Color::Black => [0, 1, 2],
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Color::Red => "red",
            Color::Black => "black",
        })
    }
}

/// Board coordinate. May point outside the grid; `Board` accessors reject such positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    #[inline]
    pub fn offset(self, row_step: i32, col_step: i32) -> Position {
        Position::new(self.row + row_step, self.col + col_step)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Figure {
    pub color: Color,
    pub king: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Figure(Figure),
}

impl From<Option<&Piece>> for Cell {
    fn from(value: Option<&Piece>) -> Self {
        match value {
            Some(piece) => Cell::Figure(Figure {
                color: piece.color(),
                king: piece.is_king(),
            }),
            None => Cell::Empty,
        }
    }
}

/// What a turn-handling frontend needs from a running match.
pub trait MatchInterface {
    fn current_board(&self) -> Vec<Vec<Cell>>;
    fn cell(&self, row: usize, col: usize) -> Option<Cell>;
    /// Single-step destinations of the current player's piece at `(row, col)`.
    fn possible_steps(&self, row: usize, col: usize) -> Option<Vec<Position>>;
    fn execute_turn(&mut self, from: Position, steps: &[Position]) -> Result<Piece, TurnError>;
    // info
    fn current_player(&self) -> Color;
}
