use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::definitions::{Cell, Color, MatchInterface, Position};
use crate::core::engine::{Board, Piece};
use crate::core::error::{MoveError, MoveResult, TurnError};

/** Rejects a chain (more than one step) that contains a slide.
 *
 * A step counts as a slide when its row distance from the starting row,
 * divided (integer division) by its 1-based index in the chain, is exactly 1.
 * Single-step sequences are never checked. */
pub fn check_chain(start: Position, steps: &[Position]) -> MoveResult<()> {
    if steps.len() <= 1 {
        return Ok(());
    }
    let slide = steps
        .iter()
        .enumerate()
        .find(|(index, step)| step.row.abs_diff(start.row) / (*index as u32 + 1) == 1);
    match slide {
        Some((index, _)) => Err(MoveError::SlideInChain { index }),
        None => Ok(()),
    }
}

/** Applies the whole step sequence of the piece at `from`, or nothing.
 *
 * The sequence is rehearsed on a duplicate of `board` first, the real board is
 * touched only after every step succeeded there. */
pub fn validate_and_apply(
    board: &mut Board,
    from: Position,
    steps: &[Position],
) -> MoveResult<Piece> {
    if steps.is_empty() {
        return Err(MoveError::EmptySequence);
    }
    let piece = board
        .get(from)?
        .copied()
        .ok_or(MoveError::InvalidMove { from, to: steps[0] })?;
    check_chain(piece.position(), steps)?;

    let mut scratch = board.duplicate();
    if let Err(err) = scratch.apply_sequence(from, steps) {
        debug!("Rejected {:?} for {} piece at {}: {}", steps, piece.color(), from, err);
        return Err(err);
    }
    drop(scratch);

    let moved = board.apply_sequence(from, steps)?;
    debug!("Accepted {:?} for {} piece at {}", steps, piece.color(), from);
    Ok(moved)
}

pub fn ui_board(board: &Board) -> Vec<Vec<Cell>> {
    let mut grid = vec![Vec::with_capacity(8); 8];
    for (row, _, cell) in board.cells() {
        grid[row].push(cell);
    }
    grid
}

/// Whose move it is. There is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    RedTurn,
    BlackTurn,
}

impl Turn {
    pub fn color(self) -> Color {
        match self {
            Turn::RedTurn => Color::Red,
            Turn::BlackTurn => Color::Black,
        }
    }

    pub fn next(self) -> Turn {
        match self {
            Turn::RedTurn => Turn::BlackTurn,
            Turn::BlackTurn => Turn::RedTurn,
        }
    }
}

impl From<Color> for Turn {
    fn from(value: Color) -> Self {
        match value {
            Color::Red => Turn::RedTurn,
            Color::Black => Turn::BlackTurn,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Turn,
}

impl Game {
    pub fn new(board: Board) -> Game {
        Game::with_player(board, Color::Red)
    }

    pub fn with_player(board: Board, player: Color) -> Game {
        Game {
            board,
            turn: player.into(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn current_turn_color(&self) -> Color {
        self.turn.color()
    }

    /** One full turn of the current player: the piece at `from` must be
     * theirs, then the steps go through `validate_and_apply`. The turn passes
     * to the opponent only on success. */
    pub fn play_turn(&mut self, from: Position, steps: &[Position]) -> Result<Piece, TurnError> {
        let player = self.current_turn_color();
        let owned = self
            .board
            .get(from)
            .map_err(MoveError::from)?
            .is_some_and(|piece| piece.color() == player);
        if !owned {
            warn!("{} tried to move from {}, not its piece", player, from);
            return Err(TurnError::OwnershipViolation {
                position: from,
                color: player,
            });
        }
        let piece = validate_and_apply(&mut self.board, from, steps).map_err(|err| {
            warn!("Turn of {} rejected: {}", player, err);
            err
        })?;
        self.turn = self.turn.next();
        info!(
            "{} moved {} -> {}, {} to play",
            player,
            from,
            piece.position(),
            self.current_turn_color()
        );
        Ok(piece)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Board::initial_starting())
    }
}

impl MatchInterface for Game {
    fn current_board(&self) -> Vec<Vec<Cell>> {
        ui_board(&self.board)
    }

    fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        let pos = Position::new(row.try_into().ok()?, col.try_into().ok()?);
        self.board.get(pos).ok().map(Cell::from)
    }

    fn possible_steps(&self, row: usize, col: usize) -> Option<Vec<Position>> {
        let pos = Position::new(row.try_into().ok()?, col.try_into().ok()?);
        let piece = self.board.get(pos).ok()??;
        if piece.color() != self.current_turn_color() {
            return None;
        }
        let steps = piece.possible_steps(&self.board);
        if steps.is_empty() {
            None
        } else {
            Some(steps)
        }
    }

    fn execute_turn(&mut self, from: Position, steps: &[Position]) -> Result<Piece, TurnError> {
        self.play_turn(from, steps)
    }

    fn current_player(&self) -> Color {
        self.current_turn_color()
    }
}
