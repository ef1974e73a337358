//! End-to-end ranking of candidate CVs against a job requirement.

pub mod error;


pub use error::RankingError;

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::cv::{RankRequest, RankedCandidate};
use crate::scoring::SimilarityScorer;
use crate::text::TextNormalizer;
use crate::translate::TextTranslator;

/// Sorts candidates by descending similarity. Ties keep input order.
///
/// NaN scores sort last.
pub fn sort_by_similarity(mut candidates: Vec<RankedCandidate>) -> Vec<RankedCandidate> {
    candidates.sort_by(|a, b| sort_key(b.similarity).total_cmp(&sort_key(a.similarity)));
    candidates
}

fn sort_key(similarity: f64) -> f64 {
    if similarity.is_nan() {
        f64::NEG_INFINITY
    } else {
        similarity
    }
}

/// Normalize, translate, embed, score, sort.
pub struct RankingPipeline {
    normalizer: TextNormalizer,
    translator: Arc<TextTranslator>,
    scorer: Arc<SimilarityScorer>,
}

impl std::fmt::Debug for RankingPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingPipeline")
            .field("translator", &self.translator)
            .field("scorer", &self.scorer)
            .finish()
    }
}

impl RankingPipeline {
    pub fn new(translator: Arc<TextTranslator>, scorer: Arc<SimilarityScorer>) -> Self {
        Self {
            normalizer: TextNormalizer::default(),
            translator,
            scorer,
        }
    }

    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn translator(&self) -> &TextTranslator {
        &self.translator
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Normalized, translated job requirement text.
    pub async fn prepare_job_requirements(&self, text: &str) -> String {
        let normalized = self.normalizer.normalize(text);
        self.translator.translate_text(&normalized).await
    }

    /// One normalized document per CV, in request order.
    ///
    /// Every field is translated on its own before the fields are joined.
    pub async fn prepare_candidates(&self, request: &RankRequest) -> Vec<String> {
        let mut field_counts = Vec::with_capacity(request.cvs.len());
        let mut fields = Vec::new();

        for cv in &request.cvs {
            let cv_fields = cv.text_fields();
            field_counts.push(cv_fields.len());
            fields.extend(cv_fields.into_iter().map(str::to_string));
        }

        let translated = self.translator.translate_all(fields).await;
        let mut translated = translated.into_iter();

        field_counts
            .into_iter()
            .map(|count| {
                let joined = translated.by_ref().take(count).collect::<Vec<_>>().join(" ");
                self.normalizer.normalize(&joined)
            })
            .collect()
    }

    #[instrument(skip_all, fields(num_cvs = request.cvs.len()))]
    pub async fn rank(&self, request: RankRequest) -> Result<Vec<RankedCandidate>, RankingError> {
        if request.cvs.is_empty() {
            debug!("No candidates to rank");
            return Ok(vec![]);
        }

        let job_text = self.prepare_job_requirements(&request.job_requirements).await;
        let documents = self.prepare_candidates(&request).await;

        let scorer = self.scorer.clone();
        let scores = tokio::task::spawn_blocking(move || scorer.score_batch(&job_text, &documents))
            .await
            .map_err(|e| RankingError::TaskFailed {
                reason: e.to_string(),
            })??;

        let ranked = request
            .cvs
            .into_iter()
            .zip(scores)
            .map(|(cv, similarity)| RankedCandidate {
                cv_id: cv.cv_id,
                similarity,
            })
            .collect();
        let ranked = sort_by_similarity(ranked);

        info!(
            num_ranked = ranked.len(),
            top_similarity = ranked.first().map(|c| c.similarity),
            "Ranked candidates"
        );

        Ok(ranked)
    }
}
