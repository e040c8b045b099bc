//! Startup configuration: source registry and lexicon, each resolved from
//! an env var, then `config/`, then built-in defaults. Loading happens once,
//! before any scoring.

pub mod lexicon;
pub mod sources;

pub use lexicon::{load_lexicon_default, ENV_LEXICON_PATH};
pub use sources::{load_registry_default, load_sources_from, ENV_SOURCES_PATH};

use crate::scorer::BiasScorer;

/// Build a ready scorer from the default configuration chain.
pub fn load_scorer_default() -> anyhow::Result<BiasScorer> {
    let registry = load_registry_default()?;
    let lexicon = load_lexicon_default()?;
    Ok(BiasScorer::with_lexicon(registry, lexicon))
}
