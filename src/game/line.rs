/// Number of aligned marks needed to win.
pub const RUN_LENGTH: usize = 4;

/// The four forward directions a run is probed in from its anchor cell.
///
/// Scanning every cell and probing only these half-plane directions visits
/// each straight line on the grid exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
}

impl Direction {
    /// Probe order used by win detection.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// (row step, column step)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// A winning run: exactly four `(row, col)` cells in run order, starting
/// at the anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    direction: Direction,
    cells: [(usize, usize); RUN_LENGTH],
}

impl WinLine {
    pub fn new(direction: Direction, cells: [(usize, usize); RUN_LENGTH]) -> Self {
        WinLine { direction, cells }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cells(&self) -> &[(usize, usize); RUN_LENGTH] {
        &self.cells
    }

    /// First cell of the run (where a drawn line starts).
    pub fn start(&self) -> (usize, usize) {
        self.cells[0]
    }

    /// Last cell of the run.
    pub fn end(&self) -> (usize, usize) {
        self.cells[RUN_LENGTH - 1]
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}
