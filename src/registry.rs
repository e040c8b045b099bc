//! # Source Registry
//!
//! Immutable mapping from source id to its declared lean and lean strength.
//!
//! - Built once from a list of `Source` records; never mutated afterwards.
//! - Duplicate ids are rejected rather than silently overwritten.
//! - Lookup is exact on `id`. There is no alias or substring fallback: an
//!   unknown id must surface as `ScorerError::UnknownSource`.
//! - `default_seed()` carries the prototype's three outlets.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::{Result, ScorerError};
use crate::model::{Lean, Source};

#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    sources: HashMap<String, Source>,
}

impl SourceRegistry {
    /// Register every source. Lean strength outside `[0, 1]` is clamped;
    /// NaN strength and repeated ids are errors.
    pub fn from_sources<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut map = HashMap::new();
        for mut src in sources {
            if src.lean_strength.is_nan() {
                return Err(ScorerError::InvalidLeanStrength {
                    id: src.id,
                    value: src.lean_strength,
                });
            }
            let clamped = clamp01(src.lean_strength);
            if clamped != src.lean_strength {
                warn!(id = %src.id, lean_strength = src.lean_strength, "lean strength outside [0, 1]; clamped");
                src.lean_strength = clamped;
            }
            if map.contains_key(&src.id) {
                return Err(ScorerError::DuplicateSource { id: src.id });
            }
            map.insert(src.id.clone(), src);
        }
        debug!(sources = map.len(), "source registry ready");
        Ok(Self { sources: map })
    }

    /// Built-in seed with the prototype's mock outlets.
    pub fn default_seed() -> Self {
        let mut sources = HashMap::new();
        for src in [
            Source::new("FOX", "Eagle News", Lean::Conservative, 0.8),
            Source::new("CNN", "Global Daily", Lean::Progressive, 0.7),
            Source::new("REUTERS", "Wire Service", Lean::Neutral, 0.1),
        ] {
            sources.insert(src.id.clone(), src);
        }
        Self { sources }
    }

    pub fn get(&self, id: &str) -> Option<&Source> {
        self.sources.get(id)
    }

    /// Like `get`, but an unregistered id is an error.
    pub fn resolve(&self, id: &str) -> Result<&Source> {
        self.get(id).ok_or_else(|| ScorerError::unknown_source(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.values()
    }
}

/// Clamp to [0.0, 1.0].
fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_prototype_outlets() {
        let r = SourceRegistry::default_seed();
        assert_eq!(r.len(), 3);
        let fox = r.get("FOX").unwrap();
        assert_eq!(fox.lean, Lean::Conservative);
        assert!((fox.lean_strength - 0.8).abs() < 1e-12);
        assert_eq!(r.get("CNN").unwrap().lean, Lean::Progressive);
        assert_eq!(r.get("REUTERS").unwrap().lean, Lean::Neutral);
    }

    #[test]
    fn resolve_unknown_is_error() {
        let r = SourceRegistry::default_seed();
        let err = r.resolve("BBC").unwrap_err();
        assert_eq!(err, ScorerError::unknown_source("BBC"));
    }

    #[test]
    fn lookup_is_exact() {
        let r = SourceRegistry::default_seed();
        assert!(r.get("fox").is_none());
        assert!(r.get("FOX ").is_none());
    }

    #[test]
    fn duplicates_are_rejected() {
        let err = SourceRegistry::from_sources([
            Source::new("A", "First", Lean::Neutral, 0.1),
            Source::new("A", "Second", Lean::Conservative, 0.9),
        ])
        .unwrap_err();
        assert_eq!(err, ScorerError::DuplicateSource { id: "A".into() });
    }

    #[test]
    fn strength_is_clamped() {
        let r = SourceRegistry::from_sources([
            Source::new("HI", "High", Lean::Conservative, 1.7),
            Source::new("LO", "Low", Lean::Progressive, -0.3),
        ])
        .unwrap();
        assert_eq!(r.get("HI").unwrap().lean_strength, 1.0);
        assert_eq!(r.get("LO").unwrap().lean_strength, 0.0);
    }

    #[test]
    fn nan_strength_is_rejected() {
        let err = SourceRegistry::from_sources([Source::new("N", "Nan", Lean::Neutral, f64::NAN)])
            .unwrap_err();
        assert!(matches!(err, ScorerError::InvalidLeanStrength { ref id, .. } if id == "N"));
    }
}
