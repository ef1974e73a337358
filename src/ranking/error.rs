use thiserror::Error;

use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("scoring task failed: {reason}")]
    TaskFailed { reason: String },
}

impl RankingError {
    /// Returns `true` if the failure originated in the embedding model.
    pub fn is_embedding_failure(&self) -> bool {
        matches!(self, RankingError::Scoring(ScoringError::Embedding(_)))
    }
}
