use anyhow::Result;
use clap::Parser;
use demine_core::{Board, GameConfig, MinefieldGenerator, RandomMinefieldGenerator};

mod game;

#[derive(Debug, Parser)]
#[command(name = "demine", about = "Terminal Minesweeper on a 10x10 grid")]
struct Cli {
    /// Seed for the mine layout; drawn from system entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::debug!("mine layout seed: {seed}");

    let config = GameConfig::new((game::ROWS, game::COLS), game::MINES);
    let board = Board::new(RandomMinefieldGenerator::new(seed).generate(config));
    game::play(board)
}
