//! Text frontend: board rendering, coordinate parsing and the prompt loop.

use std::io::{self, BufRead, Write};

use log::{debug, trace};
use thiserror::Error;

use crate::core::definitions::{Cell, Color, Figure, MatchInterface, Position};
use crate::core::engine::Piece;
use crate::core::error::{MoveError, TurnError};
use crate::core::utils::is_valid_coord;

const RESET: &str = "\x1b[0m";
const RED_FG: &str = "\x1b[31m";
const LIGHT_BG: &str = "\x1b[107m";
const DARK_BG: &str = "\x1b[106m";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected coordinates like `2,3`, got `{0}`")]
    Malformed(String),
    #[error("coordinates {0} are outside the board")]
    OutOfBounds(Position),
    #[error("no coordinates were given")]
    NoSteps,
}

pub fn parse_position(text: &str) -> Result<Position, InputError> {
    let malformed = || InputError::Malformed(text.trim().to_string());
    let mut parts = text.split(',').map(|part| part.trim().parse::<i32>());
    let (row, col) = match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => (row, col),
        _ => return Err(malformed()),
    };
    let pos = Position::new(row, col);
    if is_valid_coord(pos) {
        Ok(pos)
    } else {
        Err(InputError::OutOfBounds(pos))
    }
}

/// Space separated list of destinations, e.g. `2,0 3,1 4,0`.
pub fn parse_steps(text: &str) -> Result<Vec<Position>, InputError> {
    let steps = text
        .split_whitespace()
        .map(parse_position)
        .collect::<Result<Vec<_>, _>>()?;
    if steps.is_empty() {
        Err(InputError::NoSteps)
    } else {
        Ok(steps)
    }
}

fn symbol(figure: &Figure) -> &'static str {
    if figure.king {
        " ♛ "
    } else {
        " ☻ "
    }
}

fn render_cell(out: &mut String, row: usize, col: usize, cell: &Cell, colored: bool) {
    let text = match cell {
        Cell::Empty => "   ",
        Cell::Figure(figure) => symbol(figure),
    };
    if !colored {
        out.push_str(text);
        return;
    }
    out.push_str(if (row + col) % 2 == 0 { LIGHT_BG } else { DARK_BG });
    if matches!(cell, Cell::Figure(Figure { color: Color::Red, .. })) {
        out.push_str(RED_FG);
    }
    out.push_str(text);
    out.push_str(RESET);
}

/** Column indices on top, row index in front of each line, three characters
 * per cell. */
pub fn render(board: &[Vec<Cell>], colored: bool) -> String {
    let mut out = String::from("   ");
    for col in 0..8 {
        out.push_str(&format!("{col}  "));
    }
    for (row, line) in board.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{row} "));
        for (col, cell) in line.iter().enumerate() {
            render_cell(&mut out, row, col, cell, colored);
        }
    }
    out
}

pub fn render_plain(board: &[Vec<Cell>]) -> String {
    render(board, false)
}

/// Prompt loop over any line source, one turn after another.
pub struct Console<R, W> {
    input: R,
    output: W,
    colored: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, colored: bool) -> Self {
        Console {
            input,
            output,
            colored,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` on end of input or `quit`.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        trace!("Read input line `{line}`");
        if line == "quit" {
            Ok(None)
        } else {
            Ok(Some(line.to_string()))
        }
    }

    /// Plays turns until the input runs out.
    pub fn run<M: MatchInterface>(&mut self, game: &mut M) -> io::Result<()> {
        while self.play_turn(game)?.is_some() {}
        debug!("Input exhausted, leaving the game");
        Ok(())
    }

    /** Prompts for a piece and its destinations until a turn goes through.
     * Returns the moved piece, or `None` when the input ended first. */
    pub fn play_turn<M: MatchInterface>(&mut self, game: &mut M) -> io::Result<Option<Piece>> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", render(&game.current_board(), self.colored))?;
            writeln!(self.output)?;
            writeln!(self.output, "current player: {}", game.current_player())?;

            let Some(from) = self.select_piece(game)? else {
                return Ok(None);
            };
            match self.choose_steps(game, from)? {
                Step::Moved(piece) => return Ok(Some(piece)),
                Step::Reselect => continue,
                Step::Quit => return Ok(None),
            }
        }
    }

    fn select_piece<M: MatchInterface>(&mut self, game: &M) -> io::Result<Option<Position>> {
        loop {
            writeln!(self.output, "which piece do you want to move? (e.g. 0,1)")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let own = parse_position(&line).ok().filter(|pos| {
                matches!(
                    game.cell(pos.row as usize, pos.col as usize),
                    Some(Cell::Figure(Figure { color, .. })) if color == game.current_player()
                )
            });
            match own {
                Some(pos) => return Ok(Some(pos)),
                None => writeln!(self.output, "you must move one of your own pieces")?,
            }
        }
    }

    fn choose_steps<M: MatchInterface>(&mut self, game: &mut M, from: Position) -> io::Result<Step> {
        loop {
            writeln!(
                self.output,
                "where do you want to move it to? you can enter multiple coordinates (e.g. 2,0 3,1 4,0)"
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(Step::Quit);
            };
            if line.is_empty() {
                return Ok(Step::Reselect);
            }
            let steps = match parse_steps(&line) {
                Ok(steps) => steps,
                Err(err) => {
                    writeln!(self.output, "error: {err}")?;
                    continue;
                }
            };
            match game.execute_turn(from, &steps) {
                Ok(piece) => return Ok(Step::Moved(piece)),
                Err(TurnError::Move(MoveError::SlideInChain { .. })) => writeln!(
                    self.output,
                    "no slide moves allowed in a chain of multiple moves"
                )?,
                Err(err) => writeln!(self.output, "error: {err}")?,
            }
        }
    }
}

enum Step {
    Moved(Piece),
    Reselect,
    Quit,
}
