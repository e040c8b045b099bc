// src/lib.rs
// Public library surface for the scorer binary and integration tests.

pub mod config;
pub mod error;
pub mod gauge;
pub mod lexicon;
pub mod model;
pub mod polarization;
pub mod registry;
pub mod scorer;

// ---- Re-exports for stable public API ----
pub use crate::error::ScorerError;
pub use crate::gauge::{gauge_value, BiasLabel};
pub use crate::lexicon::SentimentLexicon;
pub use crate::model::{AnalysisResult, Article, DetectedKeyword, Lean, Source};
pub use crate::polarization::polarization_index;
pub use crate::registry::SourceRegistry;
pub use crate::scorer::BiasScorer;
