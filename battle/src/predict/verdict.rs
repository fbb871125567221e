use crate::types::CreatureSnapshot;

/// Which of the two compared creatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// 0 for the first creature, 1 for the second
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Pick this side out of a pair
    pub fn select<'a, T>(self, first: &'a T, second: &'a T) -> &'a T {
        match self {
            Side::First => first,
            Side::Second => second,
        }
    }
}

/// Why the winner was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Reason {
    /// Stat totals differ by at least the dominance threshold
    DominantStats,
    /// Stats are close and one side hits harder by type
    TypeAdvantage,
    /// Stats are close and type matchups are even
    HigherStats,
}

impl Reason {
    pub const ALL: [Reason; 3] = [
        Reason::DominantStats,
        Reason::TypeAdvantage,
        Reason::HigherStats,
    ];

    /// Stable tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::DominantStats => "DOMINANT_STATS",
            Reason::TypeAdvantage => "TYPE_ADVANTAGE",
            Reason::HigherStats => "HIGHER_STATS",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one prediction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Verdict {
    pub winner: Side,
    pub reason: Reason,

    /// Base stat totals, indexed by [`Side::index`]
    pub stat_totals: [u64; 2],

    /// Each side's effectiveness against the other, indexed by [`Side::index`]
    pub effectiveness: [f32; 2],
}

impl Verdict {
    /// Resolve the winning snapshot from the pair passed to `decide`
    pub fn winner<'a>(
        &self,
        first: &'a CreatureSnapshot,
        second: &'a CreatureSnapshot,
    ) -> &'a CreatureSnapshot {
        self.winner.select(first, second)
    }

    /// Resolve the losing snapshot from the pair passed to `decide`
    pub fn loser<'a>(
        &self,
        first: &'a CreatureSnapshot,
        second: &'a CreatureSnapshot,
    ) -> &'a CreatureSnapshot {
        self.winner.opposite().select(first, second)
    }

    pub fn winner_total(&self) -> u64 {
        self.stat_totals[self.winner.index()]
    }

    pub fn loser_total(&self) -> u64 {
        self.stat_totals[self.winner.opposite().index()]
    }
}
