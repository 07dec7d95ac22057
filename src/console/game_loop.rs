use std::io;
use std::num::{IntErrorKind, ParseIntError};

use tracing::{debug, info};

use super::render::{render_board, DisplayConfig};
use super::{LineInput, LineOutput};
use crate::error::{InputError, MoveError};
use crate::game::{Color, Game, GameOutcome, COLS};

/// Where the interactive session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingMove(Color),
    Won(Color),
    Drawn,
    AwaitingRestartDecision,
    Finished,
}

/// Answer to "Play again?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartDecision {
    PlayAgain,
    Quit,
}

/// Parse a column choice in `0..=6`.
pub fn parse_column(line: &str) -> Result<i32, InputError> {
    let trimmed = line.trim();
    let column: i64 = trimmed.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::InvalidColumn(trimmed.to_string())
        }
        _ => InputError::NotANumber(trimmed.to_string()),
    })?;
    if !(0..COLS as i64).contains(&column) {
        return Err(InputError::InvalidColumn(trimmed.to_string()));
    }
    Ok(column as i32)
}

/// Parse a case-insensitive Y/N answer.
pub fn parse_restart_decision(line: &str) -> Result<RestartDecision, InputError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("y") {
        Ok(RestartDecision::PlayAgain)
    } else if trimmed.eq_ignore_ascii_case("n") {
        Ok(RestartDecision::Quit)
    } else {
        Err(InputError::InvalidRestartDecision(trimmed.to_string()))
    }
}

/// Drives a console session: turns, win/draw announcements, restarts.
pub struct GameLoop<I, O> {
    input: I,
    output: O,
    display: DisplayConfig,
    game: Game,
    state: LoopState,
}

impl<I: LineInput, O: LineOutput> GameLoop<I, O> {
    pub fn new(input: I, output: O, display: DisplayConfig) -> Self {
        GameLoop {
            input,
            output,
            display,
            game: Game::new(),
            state: LoopState::AwaitingMove(Color::Red),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Main loop; returns once the players quit or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        while self.state != LoopState::Finished {
            self.step()?;
        }
        info!("session finished");
        Ok(())
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self) -> io::Result<()> {
        self.state = match self.state {
            LoopState::AwaitingMove(color) => self.take_turn(color)?,
            LoopState::Won(color) => {
                self.show_board()?;
                let line = format!("{} wins!", self.display.color_name(color));
                self.output.write_line(&line)?;
                LoopState::AwaitingRestartDecision
            }
            LoopState::Drawn => {
                self.show_board()?;
                self.output.write_line("It's a draw!")?;
                LoopState::AwaitingRestartDecision
            }
            LoopState::AwaitingRestartDecision => self.ask_restart()?,
            LoopState::Finished => LoopState::Finished,
        };
        Ok(())
    }

    fn take_turn(&mut self, color: Color) -> io::Result<LoopState> {
        self.show_board()?;
        loop {
            let prompt = format!("{} piece turn", self.display.color_name(color));
            self.output.write_line(&prompt)?;

            let Some(line) = self.input.read_line()? else {
                info!("input closed, ending session");
                return Ok(LoopState::Finished);
            };
            let column = match parse_column(&line) {
                Ok(column) => column,
                Err(err) => {
                    debug!(%err, "rejected column input");
                    self.output.write_line(&err.to_string())?;
                    continue;
                }
            };

            match self.game.play(column) {
                Ok(turn) => {
                    debug!(
                        color = color.name(),
                        coordinate = %turn.placed.coordinate,
                        "piece placed"
                    );
                    return Ok(match turn.outcome {
                        Some(GameOutcome::Winner { color, line }) => {
                            info!(color = color.name(), ?line, "game won");
                            LoopState::Won(color)
                        }
                        Some(GameOutcome::Draw) => {
                            info!("game drawn");
                            LoopState::Drawn
                        }
                        None => LoopState::AwaitingMove(color.other()),
                    });
                }
                Err(MoveError::GameOver) => return Ok(LoopState::AwaitingRestartDecision),
                Err(err) => {
                    debug!(%err, "rejected placement");
                    self.output.write_line(&format!("{err}, choose another one"))?;
                }
            }
        }
    }

    fn ask_restart(&mut self) -> io::Result<LoopState> {
        loop {
            self.output.write_line("Play again? (Y/N)")?;
            let Some(line) = self.input.read_line()? else {
                return Ok(LoopState::Finished);
            };
            match parse_restart_decision(&line) {
                Ok(RestartDecision::PlayAgain) => {
                    info!("starting a new game");
                    self.game.restart();
                    return Ok(LoopState::AwaitingMove(Color::Red));
                }
                Ok(RestartDecision::Quit) => return Ok(LoopState::Finished),
                Err(err) => {
                    debug!(%err, "rejected restart input");
                    self.output.write_line(&err.to_string())?;
                }
            }
        }
    }

    fn show_board(&mut self) -> io::Result<()> {
        let highlight = match self.game.state().outcome() {
            Some(GameOutcome::Winner { line, .. }) => line.to_vec(),
            _ => Vec::new(),
        };
        for line in render_board(self.game.board(), &self.display, &highlight) {
            self.output.write_line(&line)?;
        }
        Ok(())
    }
}
