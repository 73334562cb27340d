use clap::Parser;
use tictactoe_cli::{Config, GameOptions};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Play Tic Tac Toe against the computer. You are X and move first.
#[derive(Parser)]
struct Args {
    /// RNG seed for the computer's moves
    #[arg(long)]
    seed: Option<u64>,

    /// Clear the terminal before drawing the board
    #[arg(short, long, default_value_t = false)]
    clear_screen: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let config = Config {
        seed,
        options: GameOptions {
            clear_screen: args.clear_screen,
        },
    };
    config.console_game()?.play()?;

    Ok(())
}

// Logs go to stderr, the game itself uses stdout
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
