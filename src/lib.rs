//! cvrank library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`CandidateCv`], [`RankRequest`], [`RankedCandidate`], [`CvId`] - Request/response model
//! - [`RankingPipeline`], [`sort_by_similarity`] - End-to-end ranking
//!
//! ## Text & Translation
//! - [`preprocess_text`], [`TextNormalizer`] - Stopword removal and lemmatization
//! - [`TextTranslator`], [`TranslationConfig`] - Fail-open translation with memoization
//! - [`LibreTranslateClient`], [`PassthroughTranslator`] - Translation backends
//!
//! ## Embedding & Scoring
//! - [`SentenceEncoder`], [`EncoderConfig`] - Mean-pooled BERT embeddings
//! - [`SimilarityScorer`], [`cosine_similarity`] - Scaled cosine similarity
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod cv;
pub mod embedding;
pub mod gateway;
pub mod hashing;
pub mod ranking;
pub mod scoring;
pub mod text;
pub mod translate;

pub use config::{Config, ConfigError};
pub use constants::{
    CVRANK_REQUEST_ID_HEADER, CVRANK_STATUS_ERROR, CVRANK_STATUS_HEADER, CVRANK_STATUS_HEALTHY,
    CVRANK_STATUS_RANKED, CVRANK_STATUS_READY, SIMILARITY_SCALE,
};
pub use cv::{BasicInfo, CandidateCv, Certification, CvId, Education, RankRequest, RankedCandidate, WorkExperience};
pub use embedding::{
    ENCODER_EMBEDDING_DIM, ENCODER_MAX_SEQ_LEN, EmbeddingError, EncoderConfig, SentenceEncoder,
};
pub use gateway::{GatewayError, HandlerState, create_router};
pub use hashing::{hash_text, hash_to_u64};
pub use ranking::{RankingError, RankingPipeline, sort_by_similarity};
pub use scoring::{ScoringError, SimilarityScorer, cosine_similarity, l2_normalize};
pub use text::{TextNormalizer, lemmatize, preprocess_text};
#[cfg(any(test, feature = "mock"))]
pub use translate::MockTranslator;
pub use translate::{
    LanguageDetector, LibreTranslateClient, PassthroughTranslator, TextTranslator,
    TranslateError, TranslationBackend, TranslationConfig, Translator, build_backend,
};
