use std::sync::Arc;
use tracing::debug;

use crate::constants::SIMILARITY_SCALE;
use crate::embedding::{EncoderConfig, SentenceEncoder};

use super::cosine_similarity;
use super::error::ScoringError;

/// Scores documents against a query with a [`SentenceEncoder`].
pub struct SimilarityScorer {
    encoder: Arc<SentenceEncoder>,
    scale: f64,
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("encoder", &self.encoder)
            .field("scale", &self.scale)
            .finish()
    }
}

impl SimilarityScorer {
    pub fn new(encoder: Arc<SentenceEncoder>) -> Self {
        Self {
            encoder,
            scale: SIMILARITY_SCALE,
        }
    }

    /// Loads a new encoder from `config` and wraps it.
    pub fn from_config(config: EncoderConfig) -> Result<Self, ScoringError> {
        Ok(Self::new(Arc::new(SentenceEncoder::load(config)?)))
    }

    pub fn stub() -> Result<Self, ScoringError> {
        Self::from_config(EncoderConfig::stub())
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn encoder(&self) -> &SentenceEncoder {
        &self.encoder
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scaled cosine similarity between two texts.
    pub fn score(&self, query: &str, document: &str) -> Result<f64, ScoringError> {
        let query_embedding = self.encoder.embed(query)?;
        let document_embedding = self.encoder.embed(document)?;
        self.scaled(&query_embedding, &document_embedding)
    }

    /// Scores every document against `query`, in input order.
    ///
    /// The query is embedded once regardless of batch size.
    pub fn score_batch<S: AsRef<str>>(
        &self,
        query: &str,
        documents: &[S],
    ) -> Result<Vec<f64>, ScoringError> {
        if documents.is_empty() {
            return Ok(vec![]);
        }

        debug!(
            query_len = query.len(),
            num_documents = documents.len(),
            "Scoring documents against query"
        );

        let query_embedding = self.encoder.embed(query)?;

        documents
            .iter()
            .map(|document| {
                let document_embedding = self.encoder.embed(document.as_ref())?;
                self.scaled(&query_embedding, &document_embedding)
            })
            .collect()
    }

    fn scaled(&self, query: &[f32], document: &[f32]) -> Result<f64, ScoringError> {
        if query.len() != document.len() {
            return Err(ScoringError::DimensionMismatch {
                query: query.len(),
                document: document.len(),
            });
        }

        Ok(f64::from(cosine_similarity(query, document)) * self.scale)
    }
}
