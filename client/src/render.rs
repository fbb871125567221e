//! Text rendering for predictions and stat listings

use std::fmt::Write;

use pokeduel_battle::query::{immunities, resistances, weaknesses};
use pokeduel_battle::{CreatureSnapshot, Reason, Type};

use crate::service::Prediction;

pub const INSTRUCTIONS: &str = "\
• Predict battle winners
• View Pokémon stats

Commands:
  battle <first> <second>     predict who wins (use `vs` for names with spaces)
  stats <name>                show base stats and type matchups
  instructions                show this text
  help                        list commands
  exit                        leave the prompt

Powered by PokéAPI";

/// Display text for a reason tag
pub fn reason_text(reason: Reason) -> &'static str {
    match reason {
        Reason::DominantStats => "Much higher base stats",
        Reason::TypeAdvantage => "Type advantage",
        Reason::HigherStats => "Higher base stats",
    }
}

/// Format a multiplier without trailing zeros ("2", "0.5", "0.25")
pub fn format_multiplier(value: f32) -> String {
    format!("{}", value)
}

/// Type tags for display: known types by name, unknown tags capitalized
pub fn type_list(snapshot: &CreatureSnapshot) -> String {
    if snapshot.types().is_empty() {
        return "none".to_string();
    }
    snapshot
        .types()
        .iter()
        .map(|tag| match Type::from_tag(tag) {
            Some(t) => t.as_str().to_string(),
            None => capitalize(tag),
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn join_types(types: &[Type]) -> String {
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "{Winner} wins" and the reason, followed by the figures behind it
pub fn battle_report(prediction: &Prediction) -> String {
    let verdict = &prediction.verdict;
    let first = &prediction.first;
    let second = &prediction.second;

    let mut out = String::new();
    let _ = writeln!(out, "{} wins", prediction.winner().display_name());
    let _ = writeln!(out, "{}", reason_text(verdict.reason));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<12} total {:>4}  x{} against {}",
        first.display_name(),
        verdict.stat_totals[0],
        format_multiplier(verdict.effectiveness[0]),
        second.display_name()
    );
    let _ = write!(
        out,
        "{:<12} total {:>4}  x{} against {}",
        second.display_name(),
        verdict.stat_totals[1],
        format_multiplier(verdict.effectiveness[1]),
        first.display_name()
    );
    out
}

/// Name, one "stat: value" line per stat, then types and matchups
pub fn stats_report(snapshot: &CreatureSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.display_name());
    for (name, value) in snapshot.stats().iter() {
        let _ = writeln!(out, "{}: {}", name, value);
    }
    let _ = writeln!(out, "total: {}", snapshot.stat_total());
    let _ = write!(out, "types: {}", type_list(snapshot));

    let known = snapshot.known_types();
    if !known.is_empty() {
        let sections = [
            ("weak to", weaknesses(&known)),
            ("resists", resistances(&known)),
            ("immune to", immunities(&known)),
        ];
        for (label, types) in sections {
            if !types.is_empty() {
                let _ = write!(out, "\n{}: {}", label, join_types(&types));
            }
        }
    }

    if let Some(url) = snapshot.sprite_url() {
        let _ = write!(out, "\nsprite: {}", url);
    }
    if let Some(url) = snapshot.cry_url() {
        let _ = write!(out, "\ncry: {}", url);
    }
    out
}
