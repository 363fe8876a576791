use std::fmt::Debug;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::definitions::{Cell, Color, Position};
use crate::core::error::{BoardError, MoveError, MoveResult};
use crate::core::utils::{
    directions, is_dark_square, is_valid_coord, midpoint, row_distance, unpack_pos, BOARD_SIZE,
};

/** A checkers man or king. The board owns every piece; a piece is found on
 * a board through its position. */
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
    position: Position,
    king: bool,
}

impl Piece {
    pub fn new(color: Color, position: Position) -> Piece {
        Piece::with_king(color, position, false)
    }

    pub fn with_king(color: Color, position: Position, king: bool) -> Piece {
        Piece {
            color,
            position,
            king,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_king(&self) -> bool {
        self.king
    }

    fn directions(&self) -> &'static [(i32, i32)] {
        directions(self.color, self.king)
    }

    /// Empty diagonal neighbours the piece may slide to.
    pub fn slide_moves(&self, board: &Board) -> Vec<Position> {
        self.directions()
            .iter()
            .map(|&(row_step, col_step)| self.position.offset(row_step, col_step))
            .filter(|&target| board.is_vacant(target))
            .collect()
    }

    /// Landing cells behind adjacent opposing pieces.
    pub fn jump_moves(&self, board: &Board) -> Vec<Position> {
        self.directions()
            .iter()
            .filter_map(|&(row_step, col_step)| {
                let over = self.position.offset(row_step, col_step);
                let landing = self.position.offset(2 * row_step, 2 * col_step);
                let victim = board.piece_at(over)?;
                (victim.color != self.color && board.is_vacant(landing)).then_some(landing)
            })
            .collect()
    }

    /// Every single-step destination, slides first.
    pub fn possible_steps(&self, board: &Board) -> Vec<Position> {
        let mut steps = self.slide_moves(board);
        steps.extend(self.jump_moves(board));
        steps
    }

    fn king_me(&mut self) -> bool {
        let promoted = !self.king && self.position.row == self.color.far_row();
        if promoted {
            self.king = true;
        }
        promoted
    }
}

impl Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Piece")
            .field("color", &self.color)
            .field("position", &self.position)
            .field("king", &self.king)
            .finish()
    }
}

/** 8x8 grid, indexed `[row][col]` */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Black on rows 0..=2, red on rows 5..=7, all on dark squares.
    pub fn initial_starting() -> Board {
        let mut board = Board::empty();
        for color in [Color::Red, Color::Black] {
            board.fill_rows_to_start(color);
        }
        board
    }

    fn fill_rows_to_start(&mut self, color: Color) {
        for row in color.starting_rows() {
            for col in 0..BOARD_SIZE {
                let position = Position::new(row, col);
                if is_dark_square(position) {
                    let (row, col) = (row as usize, col as usize);
                    self.cells[row][col] = Some(Piece::new(color, position));
                }
            }
        }
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        is_valid_coord(pos)
    }

    fn index(pos: Position) -> Result<(usize, usize), BoardError> {
        unpack_pos(pos).ok_or(BoardError::OutOfBounds(pos))
    }

    pub fn get(&self, pos: Position) -> Result<Option<&Piece>, BoardError> {
        let (row, col) = Board::index(pos)?;
        Ok(self.cells[row][col].as_ref())
    }

    /** Raw cell write. The stored piece keeps whatever position it carries.
     * Returns the previous occupant. */
    pub fn set(
        &mut self,
        pos: Position,
        piece: Option<Piece>,
    ) -> Result<Option<Piece>, BoardError> {
        let (row, col) = Board::index(pos)?;
        Ok(std::mem::replace(&mut self.cells[row][col], piece))
    }

    pub fn is_empty(&self, pos: Position) -> Result<bool, BoardError> {
        Ok(self.get(pos)?.is_none())
    }

    /// Puts `piece` on the cell it reports as its position.
    pub fn place(&mut self, piece: Piece) -> Result<Option<Piece>, BoardError> {
        self.set(piece.position, Some(piece))
    }

    /** Independent deep copy. Pieces are plain values, so the copy shares
     * nothing with `self`. */
    pub fn duplicate(&self) -> Board {
        let board = self.clone();
        trace!("Duplicated board with {} pieces", board.pieces().count());
        board
    }

    // Lenient lookups for move generation: off-board reads as "nothing here".
    fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.get(pos).ok().flatten()
    }

    fn is_vacant(&self, pos: Position) -> bool {
        matches!(self.is_empty(pos), Ok(true))
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, piece)| (row, col, Cell::from(piece.as_ref())))
        })
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten().flatten()
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|piece| piece.color == color).count()
    }

    fn piece_to_move(&self, from: Position, to: Position) -> MoveResult<Piece> {
        self.get(from)?
            .copied()
            .ok_or(MoveError::InvalidMove { from, to })
    }

    /// Moves the piece, clears its old cell, then checks promotion.
    fn relocate(&mut self, mut piece: Piece, to: Position) -> MoveResult<Piece> {
        let from = piece.position;
        self.set(from, None)?;
        piece.position = to;
        if piece.king_me() {
            trace!("{} piece crowned at {}", piece.color, to);
        }
        self.set(to, Some(piece))?;
        Ok(piece)
    }

    pub fn apply_slide(&mut self, from: Position, to: Position) -> MoveResult<Piece> {
        let piece = self.piece_to_move(from, to)?;
        if !piece.slide_moves(self).contains(&to) {
            return Err(MoveError::InvalidMove { from, to });
        }
        trace!("{} slides {} -> {}", piece.color, from, to);
        self.relocate(piece, to)
    }

    pub fn apply_jump(&mut self, from: Position, to: Position) -> MoveResult<Piece> {
        let piece = self.piece_to_move(from, to)?;
        if !piece.jump_moves(self).contains(&to) {
            return Err(MoveError::InvalidMove { from, to });
        }
        let eaten = midpoint(from, to);
        trace!("{} jumps {} -> {} capturing {}", piece.color, from, to, eaten);
        let piece = self.relocate(piece, to)?;
        self.set(eaten, None)?;
        Ok(piece)
    }

    /// Slide for a row distance of 1, jump for 2 or more.
    pub fn apply_step(&mut self, from: Position, to: Position) -> MoveResult<Piece> {
        match row_distance(from, to) {
            0 => Err(MoveError::InvalidMove { from, to }),
            1 => self.apply_slide(from, to),
            _ => self.apply_jump(from, to),
        }
    }

    /** Applies the steps in order, following the piece. Stops at the first
     * failing step; the steps before it stay applied. */
    pub fn apply_sequence(&mut self, from: Position, steps: &[Position]) -> MoveResult<Piece> {
        let mut piece = self.piece_to_move(from, steps.first().copied().unwrap_or(from))?;
        for &to in steps {
            piece = self.apply_step(piece.position, to)?;
        }
        Ok(piece)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial_starting()
    }
}
