//! Demo that scores a handful of articles covering one story and prints each
//! result as a JSON line, followed by the story's polarization index.
//!
//! Usage: `score-demo [articles.json]` — without a path, built-in articles are used.

use anyhow::Context;
use media_bias_scorer::{config, gauge_value, Article, BiasLabel};
use serde_json::json;
use std::{fs, path::PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("media_bias_scorer=info,score_demo=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn demo_articles() -> Vec<Article> {
    vec![
        Article::new(
            "a1",
            "FOX",
            "Historic tax reform sparks hope of growth and a strong recovery.",
        )
        .with_title("Tax reform passes")
        .with_keywords(["tax", "economy"]),
        Article::new(
            "a2",
            "CNN",
            "Critics warn the controversial bill is a threat to services; a fiscal crisis looms.",
        )
        .with_title("Tax bill draws fire")
        .with_keywords(["tax", "budget"]),
        Article::new(
            "a3",
            "REUTERS",
            "Lawmakers approved the bill 52-48. Analysts see risk and some growth.",
        )
        .with_title("Senate approves tax bill")
        .with_keywords(["tax"]),
    ]
}

fn load_articles(path: PathBuf) -> anyhow::Result<Vec<Article>> {
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading articles from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing articles {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; lets BIAS_SOURCES_PATH / BIAS_LEXICON_PATH come from it.
    let _ = dotenvy::dotenv();
    init_tracing();

    let scorer = config::load_scorer_default()?;
    let articles = match std::env::args_os().nth(1) {
        Some(p) => load_articles(PathBuf::from(p))?,
        None => demo_articles(),
    };
    for src in scorer.registry().iter() {
        info!(id = %src.id, lean = %src.lean, strength = src.lean_strength, "source");
    }
    info!(articles = articles.len(), sources = scorer.registry().len(), "scoring");

    let (results, skipped) = scorer.score_known(&articles);
    for e in &skipped {
        warn!(error = %e, "article skipped");
    }

    for r in &results {
        let gauge = gauge_value(r.bias_score);
        let line = json!({
            "result": r,
            "gauge": gauge,
            "label": BiasLabel::from_gauge(gauge).as_str(),
        });
        println!("{line}");
    }

    let index = scorer.compute_polarization_index(&results);
    println!("{}", json!({ "polarizationIndex": index }));
    Ok(())
}
