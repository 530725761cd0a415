mod config;
mod engine;
mod model;

use std::io;

use anyhow::Context;
use clap::Parser;

use crate::config::settings_io::{load_settings, save_settings};
use crate::engine::api_client::HttpGameApi;
use crate::engine::reporter::{run, RunOptions};

#[derive(Debug, Parser)]
#[command(about = "Designs a dragon for each knight in Dragons of Mugloar and reports the results")]
struct Args {
    /// How many games to play
    #[arg(short = 'n', default_value_t = 1)]
    game_count: u32,

    /// Id of specific game to play
    #[arg(short = 'g')]
    game_id: Option<u64>,

    /// Print knight and dragon data for each game
    #[arg(short = 'v')]
    verbose: bool,

    /// Game server address, overriding the settings file
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds, overriding the settings file
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Save the effective settings and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(timeout) = args.timeout {
        settings.timeout_secs = timeout;
    }
    log::debug!("Using {:?}", settings);

    if args.write_config {
        let path = save_settings(&settings)?;
        println!("Settings written to {}", path.display());
        return Ok(());
    }

    let api = HttpGameApi::new(settings).context("building HTTP client")?;
    let options = RunOptions {
        count: args.game_count,
        game_id: args.game_id,
        verbose: args.verbose,
    };

    let stdout = io::stdout();
    run(&api, &options, &mut stdout.lock())?;

    Ok(())
}
