use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("embedding dimension mismatch: query has {query}, document has {document}")]
    DimensionMismatch { query: usize, document: usize },
}
