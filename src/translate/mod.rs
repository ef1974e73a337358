//! Language detection and translation of CV fields.
//!
//! The detector and translator are external services behind the
//! [`LanguageDetector`] and [`Translator`] traits. [`TextTranslator`] layers the
//! ranking policy on top: translate only text detected in the source language,
//! memoize successes, and fall back to the original text on any failure.

pub mod config;
pub mod error;
pub mod factory;
pub mod libre;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod passthrough;
pub mod service;


pub use config::TranslationConfig;
pub use error::TranslateError;
pub use factory::build_backend;
pub use libre::LibreTranslateClient;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTranslator;
pub use passthrough::PassthroughTranslator;
pub use service::TextTranslator;

use async_trait::async_trait;

#[async_trait]
/// Identifies the language of a text.
pub trait LanguageDetector: Send + Sync {
    /// Returns the ISO-639-1 code of the most likely language.
    async fn detect(&self, text: &str) -> Result<String, TranslateError>;
}

#[async_trait]
/// Translates text between two languages.
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError>;
}

/// A service offering both detection and translation.
pub trait TranslationBackend: LanguageDetector + Translator {
    /// Short label reported by the readiness endpoint.
    fn mode(&self) -> &'static str;
}
