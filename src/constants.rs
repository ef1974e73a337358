//! Cross-cutting, shared constants.
//!
//! The embedding dimension and sequence length match `bert-base-uncased`, the
//! checkpoint the ranking service is tuned for. A different checkpoint only
//! needs [`EncoderConfig`](crate::embedding::EncoderConfig) overrides.

pub const DEFAULT_EMBEDDING_DIM: usize = 768;

pub const DEFAULT_MAX_SEQ_LEN: usize = 512;

/// Cosine similarity is reported on a 0-100 scale.
pub const SIMILARITY_SCALE: f64 = 100.0;

/// Language whose text gets translated before scoring (ISO-639-1).
pub const DEFAULT_SOURCE_LANG: &str = "id";

/// Language every translated field ends up in (ISO-639-1).
pub const DEFAULT_TARGET_LANG: &str = "en";

pub const DEFAULT_MAX_CANDIDATES: usize = 1_000;

pub const DEFAULT_TRANSLATE_CONCURRENCY: usize = 8;

pub const DEFAULT_TRANSLATION_CACHE_CAPACITY: u64 = 10_000;

pub const DEFAULT_TRANSLATE_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_TRANSLATE_RETRIES: usize = 2;

/// Response header carrying the outcome of a request.
pub const CVRANK_STATUS_HEADER: &str = "x-cvrank-status";

/// Response header carrying the per-request UUID.
pub const CVRANK_REQUEST_ID_HEADER: &str = "x-cvrank-request-id";

pub const CVRANK_STATUS_RANKED: &str = "ranked";
pub const CVRANK_STATUS_READY: &str = "ready";
pub const CVRANK_STATUS_HEALTHY: &str = "healthy";
pub const CVRANK_STATUS_ERROR: &str = "error";
