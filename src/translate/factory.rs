use std::sync::Arc;

use tracing::info;

use super::config::TranslationConfig;
use super::libre::LibreTranslateClient;
use super::passthrough::PassthroughTranslator;
use super::{TranslateError, TranslationBackend};

/// Builds the appropriate [`TranslationBackend`] for the config.
pub fn build_backend(
    config: &TranslationConfig,
) -> Result<Arc<dyn TranslationBackend>, TranslateError> {
    match config.endpoint {
        Some(ref endpoint) => {
            info!(endpoint = %endpoint, "Using remote translation service");
            Ok(Arc::new(LibreTranslateClient::new(config)?))
        }
        None => {
            info!("No translation service configured, text passes through untranslated");
            Ok(Arc::new(PassthroughTranslator::new(config.target_lang.clone())))
        }
    }
}
