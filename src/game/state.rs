use super::win::LINE_LEN;
use super::{Board, Color, Coordinate, Move, WinDetector};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner {
        color: Color,
        line: [Coordinate; LINE_LEN],
    },
    Draw,
}

/// Whose turn it is, and whether the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    active: Color,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            active: Color::Red, // Red always starts
            outcome: None,
        }
    }

    /// Get the color whose turn it is
    pub fn active(&self) -> Color {
        self.active
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Record the result of the active player's placement. A game that
    /// continues passes the turn to the other color.
    pub fn record(&mut self, outcome: Option<GameOutcome>) {
        match outcome {
            Some(outcome) => self.outcome = Some(outcome),
            None => self.active = self.active.other(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Result of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub placed: Move,
    pub outcome: Option<GameOutcome>,
}

/// A game session: the only mutable owner of the board.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            state: GameState::initial(),
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Drop the active player's piece into `column`, then check for a win
    /// through it or a full board.
    pub fn play(&mut self, column: i32) -> Result<Turn, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let color = self.state.active();
        let coordinate = self.board.place(column, color)?;

        let outcome = if let Some(line) = WinDetector::new(&self.board).check(coordinate, color) {
            Some(GameOutcome::Winner { color, line })
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };
        self.state.record(outcome);

        Ok(Turn {
            placed: Move { coordinate, color },
            outcome,
        })
    }

    /// Empty the board and hand the first turn back to Red
    pub fn restart(&mut self) {
        self.board.reset();
        self.state = GameState::initial();
    }
}
