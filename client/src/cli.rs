//! Command-line and interactive command parsing

use clap::{Parser, Subcommand};

/// Predict Pokémon battle winners and view base stats
#[derive(Parser, Debug)]
#[command(name = "pokeduel")]
#[command(about = "Predict Pokémon battle winners and view base stats", long_about = None)]
#[command(version)]
pub struct Cli {
    /// PokeAPI base URL (overrides POKEAPI_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log filter directive, e.g. `debug` (overrides POKEDUEL_LOG)
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Predict the winner of a battle between two Pokémon
    Battle {
        first: String,
        second: String,

        /// Print the prediction as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a Pokémon's base stats and type matchups
    Stats {
        /// Name or Pokédex number; quote names with spaces
        name: String,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show usage instructions
    Instructions,

    /// Read commands from stdin until `exit`
    Shell,
}

/// One line typed into the interactive shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Battle { first: String, second: String },
    Stats(String),
    Instructions,
    Help,
    Exit,
    Empty,
    /// Unrecognized input, with a hint for the user
    Invalid(String),
}

/// Parse a shell line.
///
/// `battle` takes two whitespace-separated names, or two names of any shape
/// separated by ` vs `.
pub fn parse_shell_line(line: &str) -> ShellCommand {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Empty;
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_lowercase().as_str() {
        "battle" | "b" => parse_battle(rest),
        "stats" | "s" => {
            if rest.is_empty() {
                ShellCommand::Invalid("usage: stats <name>".to_string())
            } else {
                ShellCommand::Stats(rest.to_string())
            }
        }
        "instructions" => ShellCommand::Instructions,
        "help" | "?" => ShellCommand::Help,
        "exit" | "quit" | "q" => ShellCommand::Exit,
        other => ShellCommand::Invalid(format!("unknown command {:?}, try `help`", other)),
    }
}

fn parse_battle(rest: &str) -> ShellCommand {
    let words: Vec<&str> = rest.split_whitespace().collect();

    let (first, second) = match words.iter().position(|w| w.eq_ignore_ascii_case("vs")) {
        Some(idx) => (words[..idx].join(" "), words[idx + 1..].join(" ")),
        None if words.len() == 2 => (words[0].to_string(), words[1].to_string()),
        None => (String::new(), String::new()),
    };

    if first.is_empty() || second.is_empty() {
        return ShellCommand::Invalid("usage: battle <first> <second>".to_string());
    }

    ShellCommand::Battle { first, second }
}
