//! Deal a game of Shed and print what every player holds.

mod config;
mod render;

use std::{convert::Infallible, path::PathBuf};

use anyhow::{Error, bail};
use log::{debug, info};
use pico_args::Arguments;
use shed::GameEngine;

const HELP: &str = "\
Deal a game of Shed

USAGE:
  shed_cli [OPTIONS]

OPTIONS:
  --players    NAMES       Comma separated player names  [default: env SHED_PLAYERS]
  --seed       N           Seed for a reproducible shuffle  [default: env SHED_SEED or random]
  --config     PATH        JSON file with player_names and seed

FLAGS:
  --json                   Print the dealt game as JSON
  -h, --help               Print help information

ENVIRONMENT:
  SHED_PLAYERS             Comma separated player names
  SHED_SEED                Shuffle seed
  RUST_LOG                 Log level (e.g., debug)
";

#[derive(Debug)]
struct Args {
    players: Option<Vec<String>>,
    seed: Option<u64>,
    config: Option<PathBuf>,
    json: bool,
}

fn parse_args(mut pargs: Arguments) -> Result<Args, Error> {
    let args = Args {
        json: pargs.contains("--json"),
        players: pargs.opt_value_from_fn("--players", |s| {
            Ok::<_, Infallible>(config::split_names(s))
        })?,
        seed: pargs.opt_value_from_str("--seed")?,
        config: pargs.opt_value_from_os_str("--config", |s| Ok::<_, Infallible>(PathBuf::from(s)))?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {remaining:?}");
    }
    Ok(args)
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = parse_args(pargs)?;

    env_logger::builder().format_target(false).init();
    debug!("{args:?}");

    let game_config = config::load(config::Overrides {
        players: args.players,
        seed: args.seed,
        config_path: args.config,
    })?;
    info!("Dealing to {} player(s)", game_config.player_names.len());

    let engine = GameEngine::from_config(&game_config)?;
    let view = engine.view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::render_game(&view));
    }

    Ok(())
}
