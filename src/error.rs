//! Error taxonomy for registry construction and article scoring.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScorerError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScorerError {
    /// The article names a source that was never registered.
    #[error("source `{source_id}` is not registered")]
    UnknownSource { source_id: String },

    #[error("source `{id}` is registered more than once")]
    DuplicateSource { id: String },

    #[error("source `{id}` has invalid lean strength {value}")]
    InvalidLeanStrength { id: String, value: f64 },

    #[error("lexicon word `{word}` has invalid weight {value}")]
    InvalidWeight { word: String, value: f64 },
}

impl ScorerError {
    pub fn unknown_source(source_id: impl Into<String>) -> Self {
        Self::UnknownSource {
            source_id: source_id.into(),
        }
    }
}
