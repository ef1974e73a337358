use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{LanguageDetector, TranslateError, TranslationBackend, Translator};

/// In-memory backend for tests.
///
/// Texts present in the translation table are detected as `source_lang`;
/// everything else is detected as English.
#[derive(Default)]
pub struct MockTranslator {
    translations: HashMap<String, String>,
    source_lang: String,
    detect_fails: bool,
    translate_fails: bool,
    detect_calls: AtomicUsize,
    translate_calls: AtomicUsize,
    call_log: Mutex<Vec<String>>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self {
            source_lang: crate::constants::DEFAULT_SOURCE_LANG.to_string(),
            ..Default::default()
        }
    }

    pub fn with_translation(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.translations.insert(from.into(), to.into());
        self
    }

    pub fn with_source_lang(mut self, lang: impl Into<String>) -> Self {
        self.source_lang = lang.into();
        self
    }

    pub fn failing_detection(mut self) -> Self {
        self.detect_fails = true;
        self
    }

    pub fn failing_translation(mut self) -> Self {
        self.translate_fails = true;
        self
    }

    pub fn detect_calls(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst)
    }

    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }

    /// Texts passed to `translate`, in call order.
    pub fn translated_texts(&self) -> Vec<String> {
        self.call_log.lock().clone()
    }
}

#[async_trait]
impl LanguageDetector for MockTranslator {
    async fn detect(&self, text: &str) -> Result<String, TranslateError> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);

        if self.detect_fails {
            return Err(TranslateError::Request {
                reason: "mock detection failure".to_string(),
            });
        }

        if self.translations.contains_key(text) {
            Ok(self.source_lang.clone())
        } else {
            Ok("en".to_string())
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, TranslateError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        self.call_log.lock().push(text.to_string());

        if self.translate_fails {
            return Err(TranslateError::Status {
                status: 503,
                body: "mock translation failure".to_string(),
            });
        }

        Ok(self
            .translations
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string()))
    }
}

impl TranslationBackend for MockTranslator {
    fn mode(&self) -> &'static str {
        "mock"
    }
}
