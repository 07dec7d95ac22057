//! Core Connect Four game logic: board with gravity placement, win detection
//! through the newest piece, and the turn state machine.

mod board;
mod color;
mod state;
mod win;

pub use board::{Board, Coordinate, Move, Slot, COLS, ROWS};
pub use color::Color;
pub use state::{Game, GameOutcome, GameState, Turn};
pub use win::{WinDetector, DIRECTIONS, LINE_DIRECTIONS, LINE_LEN};
