use pokeduel_battle::{CreatureSnapshot, Verdict, decide};
use pokeduel_protocol::normalize_name;
use serde::Serialize;

use crate::error::DataUnavailable;
use crate::provider::CreatureProvider;

/// A verdict together with the snapshots it was decided from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub first: CreatureSnapshot,
    pub second: CreatureSnapshot,
    pub verdict: Verdict,
}

impl Prediction {
    pub fn winner(&self) -> &CreatureSnapshot {
        self.verdict.winner(&self.first, &self.second)
    }

    pub fn loser(&self) -> &CreatureSnapshot {
        self.verdict.loser(&self.first, &self.second)
    }
}

/// Resolves names through a provider and runs predictions
pub struct BattleService<P> {
    provider: P,
}

impl<P: CreatureProvider> BattleService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve user input into a snapshot
    pub async fn lookup(&self, input: &str) -> Result<CreatureSnapshot, DataUnavailable> {
        let name =
            normalize_name(input).map_err(|_| DataUnavailable::InvalidName(input.to_string()))?;
        self.provider.fetch(&name).await
    }

    /// Resolve both names concurrently and predict the winner.
    ///
    /// Fails without deciding anything if either side is unavailable.
    pub async fn predict(&self, first: &str, second: &str) -> Result<Prediction, DataUnavailable> {
        let (first, second) = tokio::try_join!(self.lookup(first), self.lookup(second))?;
        let verdict = decide(&first, &second);

        tracing::info!(
            first = first.name(),
            second = second.name(),
            winner = verdict.winner(&first, &second).name(),
            reason = %verdict.reason,
            "Predicted battle"
        );

        Ok(Prediction {
            first,
            second,
            verdict,
        })
    }
}

#[cfg(test)]
mod tests {
    use pokeduel_battle::{BaseStats, Reason, Side};

    use super::*;
    use crate::provider::MemoryProvider;

    fn snapshot(name: &str, types: &[&str], stats: [u32; 6]) -> CreatureSnapshot {
        let names = [
            "hp",
            "attack",
            "defense",
            "special-attack",
            "special-defense",
            "speed",
        ];
        let stats: BaseStats = names.into_iter().zip(stats).collect();
        CreatureSnapshot::new(name, types.iter().copied(), stats).unwrap()
    }

    fn service() -> BattleService<MemoryProvider> {
        let provider = MemoryProvider::from_iter([
            snapshot("pikachu", &["electric"], [35, 55, 40, 50, 50, 90]),
            snapshot("sandshrew", &["ground"], [50, 75, 85, 20, 30, 40]),
            snapshot("squirtle", &["water"], [44, 48, 65, 50, 64, 43]),
            snapshot("charmander", &["fire"], [39, 52, 43, 60, 50, 65]),
            snapshot("mewtwo", &["psychic"], [106, 110, 90, 154, 90, 130]),
            snapshot("mr-mime", &["psychic", "fairy"], [40, 45, 65, 100, 120, 90]),
        ]);
        BattleService::new(provider)
    }

    #[tokio::test]
    async fn test_predict_type_advantage() {
        let prediction = service().predict("Squirtle", "CHARMANDER").await.unwrap();

        assert_eq!(prediction.verdict.stat_totals, [314, 309]);
        assert_eq!(prediction.verdict.reason, Reason::TypeAdvantage);
        assert_eq!(prediction.winner().name(), "squirtle");
        assert_eq!(prediction.loser().name(), "charmander");
    }

    #[tokio::test]
    async fn test_predict_dominant_stats() {
        let prediction = service().predict("pikachu", "mewtwo").await.unwrap();

        assert_eq!(prediction.verdict.winner, Side::Second);
        assert_eq!(prediction.verdict.reason, Reason::DominantStats);
    }

    #[tokio::test]
    async fn test_predict_immunity() {
        // 320 vs 300: close enough for types to decide
        let prediction = service().predict("pikachu", "sandshrew").await.unwrap();

        assert_eq!(prediction.verdict.effectiveness, [0.0, 2.0]);
        assert_eq!(prediction.winner().name(), "sandshrew");
    }

    #[tokio::test]
    async fn test_lookup_normalizes_input() {
        let snapshot = service().lookup("  Mr. Mime ").await.unwrap();
        assert_eq!(snapshot.display_name(), "Mr-mime");
    }

    #[tokio::test]
    async fn test_predict_rejects_unknown() {
        let err = service().predict("pikachu", "agumon").await.unwrap_err();
        assert_eq!(err, DataUnavailable::UnknownCreature("agumon".to_string()));
    }

    #[tokio::test]
    async fn test_predict_rejects_invalid_name() {
        let err = service().predict("", "pikachu").await.unwrap_err();
        assert_eq!(err, DataUnavailable::InvalidName(String::new()));
    }
}
