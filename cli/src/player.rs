use anyhow::{anyhow, bail};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tictactoe::{Board, InvalidMove, Mark, OutOfRange};
use tracing::debug;

use crate::console::Console;
use crate::error::RejectedInput;

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

const PROMPT: &str = "Choose a position (from 1 to 9)";

/// Someone who can make a move.
pub trait Player {
    fn mark(&self) -> Mark;

    /// Places exactly one mark on the board and returns its position.
    ///
    /// The board must have at least one empty position. Returns an error only
    /// on communication failure, never for a rejected move.
    fn take_turn<C: Console>(&mut self, board: &mut Board, console: &mut C) -> anyhow::Result<u8>;
}

/// The person at the console, playing [`HUMAN_MARK`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanPlayer;

impl HumanPlayer {
    fn try_place(&self, board: &mut Board, input: &str) -> Result<u8, RejectedInput> {
        let input = input.trim();
        let number = input.parse::<i64>().map_err(|_| RejectedInput::Malformed {
            input: String::from(input),
        })?;
        let position = u8::try_from(number)
            .map_err(|_| InvalidMove::from(OutOfRange { position: number }))?;
        board.place(position, self.mark())?;
        Ok(position)
    }
}

impl Player for HumanPlayer {
    fn mark(&self) -> Mark {
        HUMAN_MARK
    }

    fn take_turn<C: Console>(&mut self, board: &mut Board, console: &mut C) -> anyhow::Result<u8> {
        loop {
            console.write_line(PROMPT)?;
            let Some(line) = console.read_line()? else {
                bail!("Input ended before a position was chosen");
            };
            match self.try_place(board, &line) {
                Ok(position) => {
                    debug!(position, mark = %self.mark(), "Player placed a mark");
                    return Ok(position);
                }
                Err(rejected) => {
                    debug!(input = line.as_str(), position = ?rejected.position(), %rejected, "Rejected input");
                    console.write_line(&format!("{}.", rejected))?;
                }
            }
        }
    }
}

/// Picks uniformly among the empty positions, playing [`COMPUTER_MARK`].
pub struct ComputerPlayer<R = StdRng> {
    rng: R,
}

impl<R: Rng> ComputerPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    fn mark(&self) -> Mark {
        COMPUTER_MARK
    }

    fn take_turn<C: Console>(&mut self, board: &mut Board, console: &mut C) -> anyhow::Result<u8> {
        let position = board
            .empty_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow!("The computer was asked to move on a full board"))?;
        board.place(position, self.mark())?;
        debug!(position, mark = %self.mark(), "Computer placed a mark");
        console.write_line(&format!("Computer selects square {}", position))?;
        Ok(position)
    }
}
