//! Plays one round of Crazy Eights between random agents and narrates it.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crazy_eights::{CrazyEights, GameConfig, GameRng, RandomAgent};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players at the table.
    #[arg(short, long, default_value_t = 3)]
    players: usize,

    /// Seed for deck shuffles and agents (overrides the config file).
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cards dealt to each player (overrides the config file).
    #[arg(long)]
    hand_size: Option<usize>,

    /// Invalid answers tolerated per turn before a forced draw.
    #[arg(long)]
    reprompt_limit: Option<u32>,

    /// JSON file with a `GameConfig`.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn build_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(size) = args.hand_size {
        config.initial_hand_size = size;
    }
    if let Some(limit) = args.reprompt_limit {
        config.reprompt_limit = Some(limit);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    if args.players == 0 {
        bail!("need at least one player");
    }
    let config = build_config(&args)?;
    config
        .validate(args.players)
        .context("configuration does not fit the table")?;

    let agent_rng = GameRng::new(config.seed);
    let mut game = CrazyEights::new(config);
    for i in 0..args.players {
        let name = format!("random-{}", i);
        let rng = agent_rng.for_context(&name);
        game.add_player(Box::new(RandomAgent::with_rng(name, rng)));
    }
    info!(players = game.player_count(), seed = game.config().seed, "starting round");

    match game.start().context("round aborted")? {
        Some(result) => info!(winner = %result.winner, turns = result.turns, "game finished"),
        None => info!("round was not started"),
    }
    Ok(())
}
