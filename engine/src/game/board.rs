use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::InvalidMove;
use super::types::{GameOutcome, Mark, Player};
use super::win_detector::{check_win, evaluate};

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cell(index) == Some(Mark::Empty)
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, player: Player) -> usize {
        let mark = player.mark();
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate(self)
    }

    pub fn winner(&self) -> Option<Player> {
        check_win(self)
    }

    pub fn apply_move(&self, index: usize, player: Player) -> Result<Board, InvalidMove> {
        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange { index });
        }

        if self.outcome().is_terminal() {
            return Err(InvalidMove::GameOver);
        }

        if self.cells[index] != Mark::Empty {
            return Err(InvalidMove::Occupied { index });
        }

        Ok(self.with_mark(index, player))
    }

    /// Copy of the board with `index` set, skipping legality checks. Search code
    /// only calls this on cells it got from `available_moves`.
    pub(crate) fn with_mark(&self, index: usize, player: Player) -> Board {
        debug_assert!(
            self.cells[index] == Mark::Empty,
            "with_mark on occupied cell {}",
            index
        );
        let mut next = *self;
        next.cells[index] = player.mark();
        next
    }
}

pub fn reset() -> Board {
    Board::new()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
