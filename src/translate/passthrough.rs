use async_trait::async_trait;

use super::{LanguageDetector, TranslateError, TranslationBackend, Translator};

/// Backend used when no translation service is configured.
///
/// Detection always reports the target language, so text is never rewritten.
#[derive(Debug, Clone)]
pub struct PassthroughTranslator {
    target_lang: String,
}

impl PassthroughTranslator {
    pub fn new(target_lang: impl Into<String>) -> Self {
        Self {
            target_lang: target_lang.into(),
        }
    }
}

impl Default for PassthroughTranslator {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_TARGET_LANG)
    }
}

#[async_trait]
impl LanguageDetector for PassthroughTranslator {
    async fn detect(&self, _text: &str) -> Result<String, TranslateError> {
        Ok(self.target_lang.clone())
    }
}

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, TranslateError> {
        Ok(text.to_string())
    }
}

impl TranslationBackend for PassthroughTranslator {
    fn mode(&self) -> &'static str {
        "passthrough"
    }
}
