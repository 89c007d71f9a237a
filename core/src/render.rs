use std::fmt;

use crate::*;

const MINE: char = '*';
const FLAG: char = 'F';
const HIDDEN: char = '.';

/// Lazy textual view of a board, built by [`Board::render`].
///
/// Formatting walks the grid on demand; the adapter borrows the board and
/// can be formatted any number of times without touching game state.
pub struct BoardDisplay<'a> {
    board: &'a Board,
    reveal_all: bool,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(board: &'a Board, reveal_all: bool) -> Self {
        Self { board, reveal_all }
    }

    fn glyph(&self, pos: Pos) -> char {
        let field = self.board.field();
        if self.reveal_all || self.board.cell(pos).is_revealed() {
            if field.is_mine(pos) {
                MINE
            } else {
                char::from(b'0' + field.adjacent_mines(pos))
            }
        } else if self.board.cell(pos).is_flagged() {
            FLAG
        } else {
            HIDDEN
        }
    }
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.board.size();

        write!(f, "   ")?;
        for y in 0..cols {
            write!(f, "{y:2} ")?;
        }

        for x in 0..rows {
            writeln!(f)?;
            write!(f, "{x:2} ")?;
            for y in 0..cols {
                write!(f, " {} ", self.glyph((x, y)))?;
            }
        }

        Ok(())
    }
}
