//! Embedding + model utilities.
//!
//! [`SentenceEncoder`] turns normalized text into a fixed-length vector. Use
//! [`EncoderConfig::stub`] for tests/examples without model files.

/// BERT encoder with mean pooling.
pub mod bert;
/// Encoder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod encoder;
mod error;
/// Tokenizer loading helpers.
pub mod utils;


pub use config::{ENCODER_EMBEDDING_DIM, ENCODER_MAX_SEQ_LEN, EncoderConfig};
pub use encoder::SentenceEncoder;
pub use error::EmbeddingError;
