//! # Bias Scorer
//! Pure, testable logic that maps `(article, registry)` → `AnalysisResult`.
//! No I/O; the registry and lexicon are fixed at construction.
//!
//! Policy: the article's overall lexical sentiment stands in for how the
//! source's framing pushes a reader. It is signed by the source's lean and
//! scaled by its lean strength, so a conservative outlet writing negatively
//! yields a negative (leftward) bias score.

use tracing::trace;

use crate::error::{Result, ScorerError};
use crate::lexicon::{tokenize, SentimentLexicon};
use crate::model::{AnalysisResult, Article, DetectedKeyword};
use crate::polarization::polarization_index;
use crate::registry::SourceRegistry;

#[derive(Debug, Clone)]
pub struct BiasScorer {
    registry: SourceRegistry,
    lexicon: SentimentLexicon,
}

impl BiasScorer {
    /// Scorer over the built-in lexicon.
    pub fn new(registry: SourceRegistry) -> Self {
        Self::with_lexicon(registry, SentimentLexicon::builtin())
    }

    pub fn with_lexicon(registry: SourceRegistry, lexicon: SentimentLexicon) -> Self {
        Self { registry, lexicon }
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    /// Score one article. Fails only when `article.source_id` is not registered.
    pub fn score_article(&self, article: &Article) -> Result<AnalysisResult> {
        // 1) Source must resolve; no default lean exists for unknown outlets.
        let source = self.registry.resolve(&article.source_id)?;

        // 2) Dictionary hits in text order, duplicates kept.
        let mut total = 0.0f64;
        let mut detected = Vec::new();
        for word in tokenize(&article.content) {
            if let Some(weight) = self.lexicon.weight(&word) {
                total += weight;
                detected.push(DetectedKeyword { word, weight });
            }
        }

        // 3) Mean weight; zero hits divide by one and stay neutral.
        let sentiment = (total / detected.len().max(1) as f64).clamp(-1.0, 1.0);

        // 4) Project through the source's lean.
        let bias = sentiment * source.lean.direction() * source.lean_strength;

        trace!(
            article = %article.id,
            source = %source.id,
            hits = detected.len(),
            sentiment,
            bias,
            "article scored"
        );

        Ok(AnalysisResult {
            article_id: article.id.clone(),
            sentiment_score: sentiment,
            bias_score: bias,
            detected_keywords: detected,
        })
    }

    /// Score every article in order, stopping at the first unknown source.
    pub fn score_all(&self, articles: &[Article]) -> Result<Vec<AnalysisResult>> {
        articles.iter().map(|a| self.score_article(a)).collect()
    }

    /// Score what can be scored; articles with unknown sources are returned
    /// as errors alongside the results so the caller picks the fallback.
    pub fn score_known(&self, articles: &[Article]) -> (Vec<AnalysisResult>, Vec<ScorerError>) {
        let mut ok = Vec::with_capacity(articles.len());
        let mut failed = Vec::new();
        for a in articles {
            match self.score_article(a) {
                Ok(r) => ok.push(r),
                Err(e) => failed.push(e),
            }
        }
        (ok, failed)
    }

    /// Polarization across results the caller grouped under one story.
    pub fn compute_polarization_index(&self, results: &[AnalysisResult]) -> u8 {
        polarization_index(results)
    }
}
