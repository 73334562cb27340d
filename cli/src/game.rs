use anyhow::ensure;
use tictactoe::{check_winner, Board};
use tracing::{debug, info, trace};

use crate::console::Console;
use crate::player::Player;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Where the game loop currently is. The last three are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    AwaitingHuman,
    AwaitingComputer,
    HumanWon,
    ComputerWon,
    Draw,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameState::HumanWon | GameState::ComputerWon | GameState::Draw
        )
    }

    /// The message shown when the game ends in this state.
    pub fn final_message(self) -> Option<&'static str> {
        match self {
            GameState::HumanWon => Some("Player wins!"),
            GameState::ComputerWon => Some("Computer wins!"),
            GameState::Draw => Some("It's a draw!"),
            GameState::AwaitingHuman | GameState::AwaitingComputer => None,
        }
    }
}

/// The result of looking for a completed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinCheck {
    HumanWins,
    ComputerWins,
    NoWinnerYet,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GameOptions {
    /// Clear the terminal before drawing the board, instead of printing a blank line.
    pub clear_screen: bool,
}

/// A single game, human first, alternating until someone wins or the board is full.
pub struct Game<H, C, IO> {
    board: Board,
    human: H,
    computer: C,
    console: IO,
    state: GameState,
    options: GameOptions,
    num_moves: usize,
}

impl<H: Player, C: Player, IO: Console> Game<H, C, IO> {
    pub fn new(human: H, computer: C, console: IO, options: GameOptions) -> anyhow::Result<Self> {
        ensure!(
            human.mark() != computer.mark(),
            "Both players would be playing {}",
            human.mark()
        );
        info!(human = %human.mark(), computer = %computer.mark(), "Game initialized");
        Ok(Self {
            board: Board::new(),
            human,
            computer,
            console,
            state: GameState::AwaitingHuman,
            options,
            num_moves: 0,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn into_console(self) -> IO {
        self.console
    }

    /// Looks at all eight lines of the current board.
    pub fn check_for_winner(&self) -> WinCheck {
        match check_winner(&self.board) {
            Some(mark) if mark == self.human.mark() => WinCheck::HumanWins,
            Some(mark) if mark == self.computer.mark() => WinCheck::ComputerWins,
            _ => WinCheck::NoWinnerYet,
        }
    }

    /// Performs one transition of the game loop and returns the new state.
    ///
    /// Once the game is over, this does nothing. Returns an error only on
    /// communication failure.
    pub fn step(&mut self) -> anyhow::Result<GameState> {
        let next_state = match self.state {
            GameState::AwaitingHuman | GameState::AwaitingComputer if self.board.is_full() => {
                GameState::Draw
            }
            GameState::AwaitingHuman => {
                let position = self.human.take_turn(&mut self.board, &mut self.console)?;
                self.after_move(position)?;
                match self.check_for_winner() {
                    WinCheck::HumanWins => GameState::HumanWon,
                    _ => GameState::AwaitingComputer,
                }
            }
            GameState::AwaitingComputer => {
                let position = self.computer.take_turn(&mut self.board, &mut self.console)?;
                self.after_move(position)?;
                match self.check_for_winner() {
                    WinCheck::ComputerWins => GameState::ComputerWon,
                    _ => GameState::AwaitingHuman,
                }
            }
            terminal => terminal,
        };
        trace!(from = ?self.state, to = ?next_state, "Game state transition");
        self.state = next_state;
        Ok(next_state)
    }

    /// Runs the game to the end and announces the result.
    pub fn play(&mut self) -> anyhow::Result<GameState> {
        if self.num_moves == 0 && !self.state.is_terminal() {
            self.show_board()?;
        }
        while !self.state.is_terminal() {
            self.step()?;
        }
        if let Some(message) = self.state.final_message() {
            self.console.write_line(message)?;
        }
        info!(outcome = ?self.state, moves = self.num_moves, "Game over");
        Ok(self.state)
    }

    fn after_move(&mut self, position: u8) -> anyhow::Result<()> {
        self.num_moves += 1;
        debug!(position, move_number = self.num_moves, "Move made");
        self.show_board()
    }

    fn show_board(&mut self) -> anyhow::Result<()> {
        let separator = if self.options.clear_screen {
            CLEAR_SCREEN
        } else {
            ""
        };
        self.console.write_line(separator)?;
        self.console.write_line(&self.board.render())
    }
}
