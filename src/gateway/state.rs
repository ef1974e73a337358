use std::sync::Arc;

use crate::constants::DEFAULT_MAX_CANDIDATES;
use crate::ranking::RankingPipeline;

#[derive(Clone, Debug)]
pub struct HandlerState {
    pub pipeline: Arc<RankingPipeline>,

    /// Requests with more CVs than this are rejected.
    pub max_candidates: usize,
}

impl HandlerState {
    pub fn new(pipeline: Arc<RankingPipeline>) -> Self {
        Self {
            pipeline,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }
}
