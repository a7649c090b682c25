use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use memory_core::MatchEngine;

mod bridge;
mod render;
mod settings;
mod terminal;

/// Word matching memory game.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML file with `size`, `conceal_delay_ms` and a `[catalog]` table
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Side length of the board, overrides the config file
    #[arg(short, long)]
    size: Option<u8>,
    /// Milliseconds a mismatched pair stays visible, overrides the config file
    #[arg(long)]
    delay_ms: Option<u32>,
    /// Seed for dealing boards, random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Read events and write effects as JSON lines instead of playing in the terminal
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = settings::Overrides {
        size: args.size,
        conceal_delay_ms: args.delay_ms,
    }
    .apply(settings::load_config(args.config.as_deref())?);

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Dealing {0}x{0} board with seed {1}", config.size, seed);

    let mut engine = MatchEngine::new(config, seed).context("Could not start the game")?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    if args.json {
        bridge::run(&mut engine, stdin, stdout)
    } else {
        terminal::Terminal::new(&mut engine, stdin, stdout).run()
    }
}
