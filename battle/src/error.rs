use thiserror::Error;

/// Degenerate input rejected before a prediction can run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    #[error("Stat mapping is empty")]
    EmptyStats,

    #[error("Creature name cannot be empty")]
    EmptyName,
}
