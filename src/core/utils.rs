use crate::core::definitions::{Color, Position};

pub const BOARD_SIZE: i32 = 8;

/** Tables of diagonal directions, (row step, column step) */
const RED_DIR: &[(i32, i32)] = &[(-1, 1), (-1, -1)];
const BLACK_DIR: &[(i32, i32)] = &[(1, 1), (1, -1)];
const KING_DIR: &[(i32, i32)] = &[(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Directions a piece may slide or jump in. Kings get all four diagonals.
pub fn directions(color: Color, king: bool) -> &'static [(i32, i32)] {
    match (king, color) {
        (true, _) => KING_DIR,
        (false, Color::Red) => RED_DIR,
        (false, Color::Black) => BLACK_DIR,
    }
}

#[inline]
pub fn is_valid_coord(pos: Position) -> bool {
    (0..BOARD_SIZE).contains(&pos.row) && (0..BOARD_SIZE).contains(&pos.col)
}

/// Dark squares carry the pieces: on even rows the odd columns, on odd rows the even ones.
#[inline]
pub fn is_dark_square(pos: Position) -> bool {
    (pos.row + pos.col).rem_euclid(2) == 1
}

pub fn row_distance(a: Position, b: Position) -> u32 {
    a.row.abs_diff(b.row)
}

/// Cell jumped over when moving from `from` to `to`.
pub fn midpoint(from: Position, to: Position) -> Position {
    Position::new((from.row + to.row) / 2, (from.col + to.col) / 2)
}

/// `(row, col)` index of an on-board position.
#[inline]
pub fn unpack_pos(pos: Position) -> Option<(usize, usize)> {
    if is_valid_coord(pos) {
        Some((pos.row as usize, pos.col as usize))
    } else {
        None
    }
}
