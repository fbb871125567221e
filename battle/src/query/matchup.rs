//! Type matchup helpers for decision making

use crate::types::{NEUTRAL, Type, multiplier};

/// Aggregate multiplier of an attacking type set against a defending one.
///
/// The product of [`multiplier`] over every (attacking, defending) pair, so
/// two weaknesses compound and a single immunity zeroes the result. An empty
/// set on either side is the empty product, [`NEUTRAL`]. Swapping the
/// arguments gives the reverse matchup, which is generally different.
pub fn effectiveness<A, D>(attacker_types: &[A], defender_types: &[D]) -> f32
where
    A: AsRef<str>,
    D: AsRef<str>,
{
    attacker_types
        .iter()
        .flat_map(|atk| {
            defender_types
                .iter()
                .map(move |def| multiplier(atk.as_ref(), def.as_ref()))
        })
        .fold(NEUTRAL, |acc, m| acc * m)
}

/// Get all types that are super effective against the defender
pub fn weaknesses(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| t.effectiveness_multi(defender_types) > 1.0)
        .collect()
}

/// Get all types that the defender resists (0 < effectiveness < 1)
pub fn resistances(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| {
            let eff = t.effectiveness_multi(defender_types);
            eff > 0.0 && eff < 1.0
        })
        .collect()
}

/// Get all types that the defender is immune to
pub fn immunities(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| t.effectiveness_multi(defender_types) == 0.0)
        .collect()
}
