//! model.rs — records flowing through the scorer.
//!
//! `Source` is app-level configuration, `Article` is caller-supplied content
//! (only `content` and `source_id` are read), and `AnalysisResult` is the
//! pure output of one scoring call. Field names serialize in camelCase to
//! match the front end's content model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared baseline political orientation of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Lean {
    Conservative,
    Progressive,
    Neutral,
}

impl Lean {
    /// Sign applied to sentiment when projecting it into a bias score.
    pub fn direction(self) -> f64 {
        match self {
            Lean::Conservative => 1.0,
            Lean::Progressive => -1.0,
            Lean::Neutral => 0.0,
        }
    }
}

impl fmt::Display for Lean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lean::Conservative => write!(f, "CONSERVATIVE"),
            Lean::Progressive => write!(f, "PROGRESSIVE"),
            Lean::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// A news outlet known to the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: String,
    // snake_case aliases keep TOML configs conventional; the short ones
    // accept the front end's own source records.
    #[serde(alias = "display_name", alias = "name")]
    pub display_name: String,
    #[serde(alias = "baseBias")]
    pub lean: Lean,
    /// How strongly the outlet's framing amplifies its lean, in `[0.0, 1.0]`.
    #[serde(alias = "lean_strength", alias = "biasWeight")]
    pub lean_strength: f64,
}

impl Source {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        lean: Lean,
        lean_strength: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            lean,
            lean_strength,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub source_id: String,
    /// Capture time; not used in scoring.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    /// Display tags; not used in scoring.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Article {
    /// Minimal article with the fields scoring reads; the rest get neutral defaults.
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            content: content.into(),
            source_id: source_id.into(),
            timestamp: Utc::now(),
            keywords: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// One dictionary hit, in the order it appeared in the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedKeyword {
    pub word: String,
    #[serde(alias = "score")]
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub article_id: String,
    /// Lexical sentiment of the content in `[-1.0, 1.0]`, independent of source.
    pub sentiment_score: f64,
    /// Sentiment projected through the source's lean; `|bias| <= lean_strength`.
    pub bias_score: f64,
    pub detected_keywords: Vec<DetectedKeyword>,
}
