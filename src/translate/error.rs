use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {reason}")]
    Request { reason: String },

    #[error("translation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid translation service response: {reason}")]
    InvalidResponse { reason: String },

    #[error("language detection returned no candidates")]
    NoDetection,

    #[error("invalid translation configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl TranslateError {
    /// Returns `true` for failures worth retrying (transport errors, 429, 5xx).
    pub fn is_transient(&self) -> bool {
        match self {
            TranslateError::Request { .. } => true,
            TranslateError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TranslateError::InvalidResponse {
                reason: err.to_string(),
            }
        } else {
            TranslateError::Request {
                reason: err.to_string(),
            }
        }
    }
}
