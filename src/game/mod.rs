//! Core Connect Four game logic: the board engine (column drops, undo, win
//! detection) and the player and win-line types it reports in.

mod board;
mod line;
mod player;

pub use board::{Board, Cell, COLS, ROWS};
pub use line::{Direction, WinLine, RUN_LENGTH};
pub use player::Player;
