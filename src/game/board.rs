use std::fmt;

use crate::error::BoardError;

use super::line::{Direction, WinLine, RUN_LENGTH};
use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    ///
    /// # Panics
    ///
    /// Panics unless `row < ROWS` and `col < COLS`. Use [`Board::try_get`]
    /// for coordinates that come from outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Cell at `(row, col)`, or `None` when the coordinate is off the board.
    pub fn try_get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Check if a column is full. Out-of-range columns count as full so they
    /// are never offered as moves.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a piece, ascending.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece for `player` into `col`.
    ///
    /// Returns the row where it landed, or `None` (board untouched) when the
    /// column is already full.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<Option<usize>, BoardError> {
        if col >= COLS {
            return Err(BoardError::InvalidColumn(col));
        }

        let Some(row) = (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty) else {
            return Ok(None);
        };
        self.cells[row][col] = player.to_cell();
        Ok(Some(row))
    }

    /// Apply a column-drop move. `Ok(false)` means the column was full and
    /// nothing changed.
    pub fn apply_move(&mut self, col: usize, player: Player) -> Result<bool, BoardError> {
        self.drop_piece(col, player).map(|row| row.is_some())
    }

    /// Remove the topmost piece of `col` and return the row it was in.
    ///
    /// There is no move history: undos must mirror the applies in strict
    /// last-in-first-out order.
    pub fn undo_move(&mut self, col: usize) -> Result<usize, BoardError> {
        if col >= COLS {
            return Err(BoardError::InvalidColumn(col));
        }

        let row = (0..ROWS)
            .find(|&row| self.cells[row][col] != Cell::Empty)
            .ok_or(BoardError::EmptyColumn(col))?;
        self.cells[row][col] = Cell::Empty;
        Ok(row)
    }

    /// Find a run of four for `player`.
    ///
    /// Cells are scanned row-major; from each of the player's cells the four
    /// forward directions are probed in `Direction::ALL` order and the first
    /// hit is returned.
    pub fn check_win(&self, player: Player) -> Option<WinLine> {
        let target = player.to_cell();

        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col] != target {
                    continue;
                }
                for direction in Direction::ALL {
                    if let Some(line) = self.probe(row, col, direction, target) {
                        return Some(line);
                    }
                }
            }
        }

        None
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    fn probe(&self, row: usize, col: usize, direction: Direction, target: Cell) -> Option<WinLine> {
        let (dr, dc) = direction.delta();
        let mut cells = [(0, 0); RUN_LENGTH];

        for (i, slot) in cells.iter_mut().enumerate() {
            let step = i as isize;
            let r = row.checked_add_signed(dr * step).filter(|&r| r < ROWS)?;
            let c = col.checked_add_signed(dc * step).filter(|&c| c < COLS)?;
            if self.cells[r][c] != target {
                return None;
            }
            *slot = (r, c);
        }

        Some(WinLine::new(direction, cells))
    }

    /// Build a board from a top-to-bottom picture: `.` empty, `X` human,
    /// `O` computer.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Cell::Human,
                    'O' => Cell::Computer,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Human => 'X',
                    Cell::Computer => 'O',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
