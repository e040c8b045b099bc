//! # Sentiment Lexicon
//!
//! Fixed word → weight dictionary used for lexical sentiment.
//!
//! - Built-in table is compiled in from `sentiment_lexicon.json`.
//! - Lookup is exact on whole, cleaned words; substrings never match.
//! - Custom tables can be layered on top from a JSON file at startup.

use anyhow::Context;
use once_cell::sync::Lazy;
use std::{collections::HashMap, fs, path::Path};
use tracing::{debug, warn};

use crate::error::{Result, ScorerError};

static BUILTIN: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, f64>>(raw).expect("valid sentiment lexicon")
});

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentLexicon {
    words: HashMap<String, f64>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SentimentLexicon {
    /// The dictionary the scoring algorithm was designed against.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN.clone(),
        }
    }

    /// Build a lexicon from arbitrary entries.
    ///
    /// Keys are lowercased. Keys that still contain anything other than
    /// ASCII letters could never match a cleaned token, so they are dropped.
    /// Weights are clamped into `[-1, 1]`; non-finite weights are rejected.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut lex = Self {
            words: HashMap::new(),
        };
        lex.insert_all(entries)?;
        Ok(lex)
    }

    /// Read a JSON object `{ "word": weight, ... }` as a standalone lexicon.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let entries = read_entries(path.as_ref())?;
        Ok(Self::from_entries(entries)?)
    }

    /// Layer a JSON file over this lexicon; entries from the file win.
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> anyhow::Result<()> {
        let entries = read_entries(path.as_ref())?;
        self.insert_all(entries)?;
        Ok(())
    }

    fn insert_all<I, S>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (raw, weight) in entries {
            let word = raw.as_ref().trim().to_lowercase();
            if !weight.is_finite() {
                return Err(ScorerError::InvalidWeight {
                    word,
                    value: weight,
                });
            }
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
                warn!(word = %raw.as_ref(), "lexicon entry can never match a cleaned word; dropped");
                continue;
            }
            let clamped = weight.clamp(-1.0, 1.0);
            if clamped != weight {
                warn!(%word, weight, "lexicon weight outside [-1, 1]; clamped");
            }
            self.words.insert(word, clamped);
        }
        debug!(words = self.words.len(), "sentiment lexicon ready");
        Ok(())
    }

    /// Weight for an already-cleaned word, if it is in the dictionary.
    #[inline]
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn read_entries(path: &Path) -> anyhow::Result<HashMap<String, f64>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading lexicon from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing lexicon {}", path.display()))
}

/// Split on whitespace, lowercase, and keep only ASCII letters of each token.
/// Tokens that end up empty (digits, punctuation) are skipped.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|tok| {
        let clean: String = tok
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase())
            .collect();
        (!clean.is_empty()).then_some(clean)
    })
}
