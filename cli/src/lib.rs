mod console;
mod error;
mod game;
mod player;
pub use console::*;
pub use error::*;
pub use game::*;
pub use player::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Config {
    pub seed: u64,
    pub options: GameOptions,
}

impl Config {
    /// A human on the terminal against a computer seeded with [`Config::seed`].
    pub fn console_game(&self) -> anyhow::Result<Game<HumanPlayer, ComputerPlayer, StdConsole>> {
        Game::new(
            HumanPlayer,
            ComputerPlayer::new(StdRng::seed_from_u64(self.seed)),
            StdConsole::new(),
            self.options,
        )
    }
}
