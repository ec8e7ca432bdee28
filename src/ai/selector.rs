use tracing::debug;

use crate::error::{BoardError, SelectError};
use crate::game::{Board, Player, COLS};

use super::agent::Agent;
use super::random::RandomAgent;

/// Why the selector settled on a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// Completes a computer four-in-a-row.
    Win,
    /// Occupies the cell that would complete the human's four-in-a-row.
    Block,
    /// Neither applied; uniform pick among non-full columns.
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub column: usize,
    pub reason: SelectionReason,
}

/// First column, scanning left to right, where dropping a piece for
/// `player` produces a win for `player`.
///
/// Every probe is undone before moving on, so the board comes back exactly
/// as it was passed in.
pub fn find_winning_column(board: &mut Board, player: Player) -> Result<Option<usize>, BoardError> {
    for col in 0..COLS {
        if !board.apply_move(col, player)? {
            continue;
        }
        let wins = board.check_win(player).is_some();
        board.undo_move(col)?;
        if wins {
            return Ok(Some(col));
        }
    }
    Ok(None)
}

/// One-ply computer opponent: take an immediate win, otherwise block the
/// human's immediate win, otherwise play a random non-full column.
///
/// No deeper search is done.
pub struct MoveSelector {
    fallback: RandomAgent,
}

impl MoveSelector {
    pub fn new() -> Self {
        MoveSelector {
            fallback: RandomAgent::new(),
        }
    }

    /// Selector whose random fallback is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        MoveSelector {
            fallback: RandomAgent::with_seed(seed),
        }
    }

    /// Seeded when a seed is given, OS-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Choose the computer's column and say why.
    ///
    /// Fails with `NoLegalMove` on a full board; callers are expected to
    /// notice the full board before asking.
    pub fn choose(&mut self, board: &mut Board) -> Result<Selection, SelectError> {
        if board.is_full() {
            return Err(SelectError::NoLegalMove);
        }

        let selection = if let Some(column) = find_winning_column(board, Player::Computer)? {
            Selection {
                column,
                reason: SelectionReason::Win,
            }
        } else if let Some(column) = find_winning_column(board, Player::Human)? {
            Selection {
                column,
                reason: SelectionReason::Block,
            }
        } else {
            Selection {
                column: self.fallback.pick(board)?,
                reason: SelectionReason::Random,
            }
        };

        debug!(
            column = selection.column,
            reason = ?selection.reason,
            "computer move selected"
        );
        Ok(selection)
    }

    /// Column for the computer to play next.
    pub fn select_move(&mut self, board: &mut Board) -> Result<usize, SelectError> {
        self.choose(board).map(|selection| selection.column)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MoveSelector {
    fn select_column(&mut self, board: &mut Board) -> Result<usize, SelectError> {
        self.select_move(board)
    }

    fn name(&self) -> &str {
        "Win/Block"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ROWS;

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "....X..",
            "OOO.XX.",
        ]);
        let mut selector = MoveSelector::with_seed(0);
        let selection = selector.choose(&mut board).unwrap();
        assert_eq!(selection.column, 3);
        assert_eq!(selection.reason, SelectionReason::Win);
    }

    #[test]
    fn test_win_preferred_over_block() {
        // Human threatens column 0 (vertical), computer can win in column 6.
        let mut board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            "X.....O",
            "X.....O",
            "XX....O",
        ]);
        let mut selector = MoveSelector::with_seed(0);
        let selection = selector.choose(&mut board).unwrap();
        assert_eq!(selection.column, 6);
        assert_eq!(selection.reason, SelectionReason::Win);
    }

    #[test]
    fn test_blocks_human_threat() {
        let mut board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "......O",
            ".XXX..O",
        ]);
        let mut selector = MoveSelector::with_seed(0);
        let selection = selector.choose(&mut board).unwrap();
        // Both ends complete the run; the lower column is probed first
        assert_eq!(selection.column, 0);
        assert_eq!(selection.reason, SelectionReason::Block);
    }

    #[test]
    fn test_blocks_diagonal_threat() {
        // Human holds (5,0) (4,1) (3,2); (2,3) is the next landing cell.
        let mut board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            "..XO...",
            ".XOX...",
            "XOOX...",
        ]);
        let mut selector = MoveSelector::with_seed(3);
        let selection = selector.choose(&mut board).unwrap();
        assert_eq!(selection.column, 3);
        assert_eq!(selection.reason, SelectionReason::Block);
    }

    #[test]
    fn test_lowest_winning_column_wins_tie() {
        let mut board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".OOO...",
        ]);
        let mut selector = MoveSelector::with_seed(0);
        assert_eq!(selector.select_move(&mut board), Ok(0));
    }

    #[test]
    fn test_board_unchanged_after_selection() {
        let boards = [
            Board::new(),
            Board::from_rows([
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "OOO.XX.",
            ]),
            Board::from_rows([
                ".......",
                ".......",
                ".......",
                "X......",
                "X......",
                "X.....O",
            ]),
        ];
        let mut selector = MoveSelector::with_seed(11);
        for original in boards {
            let mut board = original;
            selector.select_move(&mut board).unwrap();
            assert_eq!(board, original);
        }
    }

    #[test]
    fn test_random_fallback_is_legal_and_reproducible() {
        let mut board = Board::from_rows([
            "..X....",
            "..O....",
            "..X....",
            "..O....",
            "..X....",
            "..O....",
        ]);

        let mut a = MoveSelector::with_seed(99);
        let mut b = MoveSelector::with_seed(99);
        for _ in 0..50 {
            let sa = a.choose(&mut board).unwrap();
            let sb = b.choose(&mut board).unwrap();
            assert_eq!(sa, sb);
            assert_eq!(sa.reason, SelectionReason::Random);
            assert_ne!(sa.column, 2);
        }
    }

    #[test]
    fn test_full_board_fails_fast() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.apply_move(col, Player::Human).unwrap();
            }
        }
        let mut selector = MoveSelector::with_seed(0);
        assert_eq!(selector.select_move(&mut board), Err(SelectError::NoLegalMove));
    }

    #[test]
    fn test_find_winning_column_none_on_empty_board() {
        let mut board = Board::new();
        assert_eq!(find_winning_column(&mut board, Player::Human), Ok(None));
        assert_eq!(find_winning_column(&mut board, Player::Computer), Ok(None));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_selector_as_agent() {
        let mut agent: Box<dyn Agent> = Box::new(MoveSelector::with_seed(5));
        let mut board = Board::new();
        let col = agent.select_column(&mut board).unwrap();
        assert!(col < COLS);
        assert_eq!(agent.name(), "Win/Block");
    }
}
