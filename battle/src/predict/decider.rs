use crate::query::effectiveness;
use crate::types::CreatureSnapshot;

use super::verdict::{Reason, Side, Verdict};

/// Stat total gap at which type matchups stop mattering
pub const DOMINANCE_THRESHOLD: u64 = 200;

/// Predict the winner between two creatures.
///
/// Rules, first match wins:
/// 1. Stat totals differ by at least [`DOMINANCE_THRESHOLD`]: the higher
///    total wins ([`Reason::DominantStats`]).
/// 2. The effectiveness of each side's types against the other differs:
///    the larger multiplier wins ([`Reason::TypeAdvantage`]).
/// 3. Otherwise the higher total wins ([`Reason::HigherStats`]).
///
/// Argument order only matters on an exact stat tie under rule 3, where
/// `second` wins. The result depends on nothing but the two snapshots.
pub fn decide(first: &CreatureSnapshot, second: &CreatureSnapshot) -> Verdict {
    let stat_totals = [first.stat_total(), second.stat_total()];
    let multipliers = [
        effectiveness(first.types(), second.types()),
        effectiveness(second.types(), first.types()),
    ];

    let (winner, reason) = if stat_totals[0].abs_diff(stat_totals[1]) >= DOMINANCE_THRESHOLD {
        (higher_total(stat_totals), Reason::DominantStats)
    } else if multipliers[0] != multipliers[1] {
        let winner = if multipliers[0] > multipliers[1] {
            Side::First
        } else {
            Side::Second
        };
        (winner, Reason::TypeAdvantage)
    } else {
        (higher_total(stat_totals), Reason::HigherStats)
    };

    tracing::debug!(
        first = first.name(),
        second = second.name(),
        first_total = stat_totals[0],
        second_total = stat_totals[1],
        first_effectiveness = multipliers[0],
        second_effectiveness = multipliers[1],
        winner = ?winner,
        reason = %reason,
        "Decided matchup"
    );

    Verdict {
        winner,
        reason,
        stat_totals,
        effectiveness: multipliers,
    }
}

/// Strictly greater total wins; an exact tie goes to the second creature
fn higher_total(stat_totals: [u64; 2]) -> Side {
    if stat_totals[0] > stat_totals[1] {
        Side::First
    } else {
        Side::Second
    }
}
