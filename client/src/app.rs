//! Command execution shared by the one-shot CLI and the interactive shell

use std::io::{self, Write};

use anyhow::Result;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::{ShellCommand, parse_shell_line};
use crate::error::DataUnavailable;
use crate::provider::CreatureProvider;
use crate::render::{INSTRUCTIONS, battle_report, stats_report};
use crate::service::BattleService;

const SHELL_HELP: &str = "\
Commands:
  battle <first> <second>   predict a winner (or: battle <first> vs <second>)
  stats <name>              show base stats
  instructions              show instructions
  exit                      leave";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid Pokémon: {0}")]
    Unavailable(#[from] DataUnavailable),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the shell should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Nothing,
    Exit,
}

pub struct App<P> {
    service: BattleService<P>,
}

impl<P: CreatureProvider> App<P> {
    pub fn new(service: BattleService<P>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &BattleService<P> {
        &self.service
    }

    /// Predict a battle and render it as text or JSON
    pub async fn battle(&self, first: &str, second: &str, json: bool) -> Result<String, AppError> {
        let prediction = self.service.predict(first, second).await?;
        if json {
            Ok(serde_json::to_string_pretty(&prediction)?)
        } else {
            Ok(battle_report(&prediction))
        }
    }

    /// Look up one creature and render its stats as text or JSON
    pub async fn stats(&self, name: &str, json: bool) -> Result<String, AppError> {
        let snapshot = self.service.lookup(name).await?;
        if json {
            Ok(serde_json::to_string_pretty(&snapshot)?)
        } else {
            Ok(stats_report(&snapshot))
        }
    }

    /// Handle one shell line; lookup failures are reported, not returned
    pub async fn handle_line(&self, line: &str) -> Reply {
        let result = match parse_shell_line(line) {
            ShellCommand::Battle { first, second } => self.battle(&first, &second, false).await,
            ShellCommand::Stats(name) => self.stats(&name, false).await,
            ShellCommand::Instructions => Ok(INSTRUCTIONS.to_string()),
            ShellCommand::Help => Ok(SHELL_HELP.to_string()),
            ShellCommand::Invalid(hint) => Ok(hint),
            ShellCommand::Empty => return Reply::Nothing,
            ShellCommand::Exit => return Reply::Exit,
        };

        match result {
            Ok(text) => Reply::Print(text),
            Err(e) => {
                tracing::debug!(error = %e, "Shell command failed");
                Reply::Print(e.to_string())
            }
        }
    }

    /// Read lines from stdin until `exit` or end of input
    pub async fn run_shell(&self) -> Result<()> {
        println!("Pokémon Analyzer");
        println!("Type `help` for commands");

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match self.handle_line(&line).await {
                Reply::Print(text) => println!("{}\n", text),
                Reply::Nothing => {}
                Reply::Exit => break,
            }
        }

        Ok(())
    }
}
