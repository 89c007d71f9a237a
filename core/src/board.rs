use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Completion state of one game session. A derived record: it never gates
/// `reveal` or `toggle_flag`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was already revealed; nothing changed.
    AlreadyRevealed,
    /// The cell carries a flag and must be unflagged first; nothing changed.
    Flagged,
    /// The cell hid a mine. It is now revealed, the game is lost.
    Mine,
    /// The cell was revealed, cascading through its zero-adjacency region.
    Cleared,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Placed,
    Removed,
    /// The cell is already revealed and cannot be flagged.
    Rejected,
}

/// The board: a fixed minefield plus the player-visible cell grid.
///
/// All cells are created at construction and live exactly as long as the
/// board. Adjacency between cells is looked up through [`neighbors`], never
/// stored as links.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    field: Minefield,
    cells: Array2<CellState>,
    revealed: CellCount,
    flagged: CellCount,
    status: Status,
}

impl Board {
    pub fn new(field: Minefield) -> Self {
        let size = field.size();
        Self {
            field,
            cells: Array2::default(size.as_index()),
            revealed: 0,
            flagged: 0,
            status: Status::default(),
        }
    }

    pub fn size(&self) -> Pos {
        self.field.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.field.mine_count()
    }

    /// Mines minus placed flags. Negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        self.field.mine_count() as isize - self.flagged as isize
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn cell(&self, pos: Pos) -> CellState {
        self.cells[pos.as_index()]
    }

    /// True iff every non-mine cell is revealed. Flags play no part.
    pub fn is_won(&self) -> bool {
        self.revealed == self.field.safe_cells()
    }

    pub(crate) fn field(&self) -> &Minefield {
        &self.field
    }

    /// Reveals the cell at `pos`.
    ///
    /// Revealed or flagged cells refuse without any state change. Revealing
    /// a mine marks that one cell revealed and loses the game. Revealing a
    /// zero-adjacency cell floods its connected zero region plus the
    /// bordering numbered cells; flagged cells are never auto-revealed.
    pub fn reveal(&mut self, pos: Pos) -> Result<RevealOutcome> {
        let pos = self.field.validate(pos)?;

        Ok(match self.cells[pos.as_index()] {
            CellState::Revealed(_) => RevealOutcome::AlreadyRevealed,
            CellState::Flagged => RevealOutcome::Flagged,
            CellState::Hidden => self.reveal_hidden(pos),
        })
    }

    fn reveal_hidden(&mut self, pos: Pos) -> RevealOutcome {
        let count = self.field.adjacent_mines(pos);
        self.cells[pos.as_index()] = CellState::Revealed(count);

        if self.field.is_mine(pos) {
            self.status = Status::Lost;
            return RevealOutcome::Mine;
        }

        self.revealed += 1;
        if count == 0 {
            self.flood_from(pos);
        }

        if self.status == Status::InProgress && self.is_won() {
            self.status = Status::Won;
        }
        RevealOutcome::Cleared
    }

    /// Worklist flood fill. Every cell is revealed at most once, so the
    /// queue drains after no more than rows×cols reveals.
    fn flood_from(&mut self, start: Pos) {
        let size = self.field.size();
        let mut queue: VecDeque<Pos> = neighbors(start, size).collect();

        while let Some(pos) = queue.pop_front() {
            if !matches!(self.cells[pos.as_index()], CellState::Hidden) {
                continue;
            }

            let count = self.field.adjacent_mines(pos);
            self.cells[pos.as_index()] = CellState::Revealed(count);
            self.revealed += 1;

            if count == 0 {
                queue.extend(neighbors(pos, size));
            }
        }
    }

    /// Toggles the flag at `pos`; refuses on revealed cells.
    pub fn toggle_flag(&mut self, pos: Pos) -> Result<FlagOutcome> {
        let pos = self.field.validate(pos)?;

        Ok(match self.cells[pos.as_index()] {
            CellState::Hidden => {
                self.cells[pos.as_index()] = CellState::Flagged;
                self.flagged += 1;
                FlagOutcome::Placed
            }
            CellState::Flagged => {
                self.cells[pos.as_index()] = CellState::Hidden;
                self.flagged -= 1;
                FlagOutcome::Removed
            }
            CellState::Revealed(_) => FlagOutcome::Rejected,
        })
    }

    pub fn render(&self, reveal_all: bool) -> BoardDisplay<'_> {
        BoardDisplay::new(self, reveal_all)
    }
}
