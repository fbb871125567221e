//! pokeduel binary.
//!
//! ```bash
//! pokeduel battle charizard blastoise
//! pokeduel stats "mr. mime" --json
//! pokeduel            # interactive prompt
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pokeduel_client::cli::{Cli, Command};
use pokeduel_client::render::INSTRUCTIONS;
use pokeduel_client::{App, BattleService, ClientConfig, PokeApiProvider, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(filter) = cli.log {
        config.log_filter = filter;
    }

    logging::setup_logging(&config.log_filter)?;
    tracing::debug!(api_url = %config.api_url, "Starting pokeduel");

    let provider = PokeApiProvider::new(&config).context("Failed to build HTTP client")?;
    let app = App::new(BattleService::new(provider));

    match cli.command.unwrap_or(Command::Shell) {
        Command::Battle {
            first,
            second,
            json,
        } => println!("{}", app.battle(&first, &second, json).await?),
        Command::Stats { name, json } => println!("{}", app.stats(&name, json).await?),
        Command::Instructions => println!("{}", INSTRUCTIONS),
        Command::Shell => app.run_shell().await?,
    }

    Ok(())
}
