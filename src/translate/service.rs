use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use moka::sync::Cache;
use tracing::{debug, warn};

use super::config::TranslationConfig;
use super::factory::build_backend;
use super::passthrough::PassthroughTranslator;
use super::{TranslateError, TranslationBackend};
use crate::hashing::hash_text;

/// Fail-open translation with memoization.
///
/// Text detected as `source_lang` is translated to `target_lang`; anything
/// else is returned as-is. Detection or translation failures never surface to
/// the caller: the original text is returned and a warning is logged.
pub struct TextTranslator {
    backend: Arc<dyn TranslationBackend>,
    source_lang: String,
    target_lang: String,
    cache: Cache<[u8; 32], String>,
    concurrency: usize,
}

impl std::fmt::Debug for TextTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextTranslator")
            .field("mode", &self.backend.mode())
            .field("source_lang", &self.source_lang)
            .field("target_lang", &self.target_lang)
            .field("concurrency", &self.concurrency)
            .finish()
    }
}

impl TextTranslator {
    pub fn new(backend: Arc<dyn TranslationBackend>, config: &TranslationConfig) -> Self {
        Self {
            backend,
            source_lang: config.source_lang.clone(),
            target_lang: config.target_lang.clone(),
            cache: Cache::builder().max_capacity(config.cache_capacity).build(),
            concurrency: config.concurrency.max(1),
        }
    }

    /// Builds the backend selected by `config` and wraps it.
    pub fn from_config(config: &TranslationConfig) -> Result<Self, TranslateError> {
        let backend = build_backend(config)?;
        Ok(Self::new(backend, config))
    }

    /// Translator that never rewrites text.
    pub fn passthrough() -> Self {
        let config = TranslationConfig::passthrough();
        let backend = Arc::new(PassthroughTranslator::new(config.target_lang.clone()));
        Self::new(backend, &config)
    }

    pub fn mode(&self) -> &'static str {
        self.backend.mode()
    }

    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// Number of memoized results.
    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Translates `text` if it is in the source language.
    pub async fn translate_text(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let key = hash_text(text);
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        match self.detect_and_translate(text).await {
            Ok(output) => {
                self.cache.insert(key, output.clone());
                output
            }
            Err(e) => {
                warn!(
                    error = %e,
                    chars = text.len(),
                    "Translation failed, using original text"
                );
                text.to_string()
            }
        }
    }

    /// Translates every text with bounded concurrency, preserving order.
    pub async fn translate_all(&self, texts: Vec<String>) -> Vec<String> {
        stream::iter(texts)
            .map(|text| async move { self.translate_text(&text).await })
            .buffered(self.concurrency)
            .collect()
            .await
    }

    async fn detect_and_translate(&self, text: &str) -> Result<String, TranslateError> {
        let detected = self.backend.detect(text).await?;

        if !detected.eq_ignore_ascii_case(&self.source_lang) {
            debug!(detected = %detected, "Text not in source language, skipping translation");
            return Ok(text.to_string());
        }

        self.backend
            .translate(text, &self.source_lang, &self.target_lang)
            .await
    }
}
