//! Text normalization applied to job requirements and aggregated CV text.
//!
//! [`preprocess_text`] strips ASCII punctuation, lowercases, drops English
//! stopwords and any token containing `unknown`, then lemmatizes what is left.

pub mod lemmatizer;
pub mod stopwords;


pub use lemmatizer::lemmatize;
pub use stopwords::ENGLISH_STOPWORDS;

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tokens containing this marker are placeholders from upstream CV parsers.
pub const UNKNOWN_MARKER: &str = "unknown";

static DEFAULT_NORMALIZER: LazyLock<TextNormalizer> = LazyLock::new(TextNormalizer::default);

/// Normalizes `text` with the default [`TextNormalizer`].
pub fn preprocess_text(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}

/// Removes every ASCII punctuation character, leaving all other characters intact.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Stopword filter + lemmatizer pipeline.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: HashSet<&'static str>,
    lemmatize: bool,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().copied().collect(),
            lemmatize: true,
        }
    }
}

impl TextNormalizer {
    /// Creates a normalizer with the English stopword list and lemmatization on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables lemmatization.
    pub fn with_lemmatization(mut self, enabled: bool) -> Self {
        self.lemmatize = enabled;
        self
    }

    /// Returns `true` if `word` (already lowercased) is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowered = strip_punctuation(text).to_lowercase();

        lowered
            .split_whitespace()
            .filter(|word| !self.is_stopword(word) && !word.contains(UNKNOWN_MARKER))
            .map(|word| {
                if self.lemmatize {
                    lemmatize(word)
                } else {
                    word.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
