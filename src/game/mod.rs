//! Core Connect Four game logic: board representation, player types, win
//! detection, and the turn state machine.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, BoardError, Cell, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError, MoveVerdict, Placement};
pub use win::{find_win, has_win, WinningLine, WIN_LENGTH};
