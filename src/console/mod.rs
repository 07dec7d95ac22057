//! Console front end: line-based input/output, colored board rendering and
//! the interactive game loop.

mod game_loop;
mod io;
mod render;

pub use game_loop::{parse_column, parse_restart_decision, GameLoop, LoopState, RestartDecision};
pub use io::{LineInput, LineOutput};
pub use render::{render_board, DisplayConfig, COLUMN_HEADER};
