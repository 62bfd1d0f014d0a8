mod play;
mod uci;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use minimax_engine::{EngineConfig, MinimaxEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fixed-depth minimax chess engine", long_about = None)]
struct Args {
    /// TOML file with engine settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies; overrides the config file
    #[arg(long)]
    depth: Option<u8>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default)]
enum Mode {
    /// Speak UCI on stdin/stdout (default)
    #[default]
    Uci,
    /// Play a game in the terminal as White against the engine
    Play,
}

fn main() -> anyhow::Result<()> {
    // stdout belongs to the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config = config.with_depth(depth).context("invalid --depth")?;
    }
    info!(?config, "engine configured");

    let engine = MinimaxEngine::with_config(config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    match args.mode.unwrap_or_default() {
        Mode::Uci => uci::run(engine, stdin.lock(), stdout.lock()),
        Mode::Play => play::run(engine, stdin.lock(), stdout.lock()),
    }
}
