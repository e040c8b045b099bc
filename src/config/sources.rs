// src/config/sources.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::model::Source;
use crate::registry::SourceRegistry;

pub const ENV_SOURCES_PATH: &str = "BIAS_SOURCES_PATH";

/// Load source records from an explicit path. Supports TOML or JSON formats.
pub fn load_sources_from(path: &Path) -> Result<Vec<Source>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading sources from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_sources(&content, ext.as_str())
        .with_context(|| format!("parsing sources from {}", path.display()))
}

/// Build the registry using env var + fallbacks:
/// 1) $BIAS_SOURCES_PATH (must exist)
/// 2) config/sources.toml
/// 3) config/sources.json
/// 4) built-in seed
pub fn load_registry_default() -> Result<SourceRegistry> {
    if let Ok(p) = std::env::var(ENV_SOURCES_PATH) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            return Err(anyhow!("{ENV_SOURCES_PATH} points to non-existent path"));
        }
        return registry_from(&pb);
    }
    for candidate in ["config/sources.toml", "config/sources.json"] {
        let pb = PathBuf::from(candidate);
        if pb.exists() {
            return registry_from(&pb);
        }
    }
    info!("no source config found; using built-in seed");
    Ok(SourceRegistry::default_seed())
}

fn registry_from(path: &Path) -> Result<SourceRegistry> {
    let sources = load_sources_from(path)?;
    let registry = SourceRegistry::from_sources(sources)
        .with_context(|| format!("registering sources from {}", path.display()))?;
    info!(path = %path.display(), sources = registry.len(), "source registry loaded");
    Ok(registry)
}

fn parse_sources(s: &str, hint_ext: &str) -> Result<Vec<Source>> {
    // Try TOML first if hinted or content looks like toml.
    let try_toml = hint_ext == "toml" || s.contains("[[sources]]");
    if try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = parse_json(s) {
        return Ok(v);
    }
    if !try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    Err(anyhow!("unsupported sources format"))
}

fn parse_toml(s: &str) -> Result<Vec<Source>> {
    #[derive(Deserialize)]
    struct TomlSources {
        sources: Vec<Source>,
    }
    let v: TomlSources = toml::from_str(s)?;
    Ok(v.sources)
}

/// JSON is either a bare array of sources or `{ "sources": [...] }`.
fn parse_json(s: &str) -> Result<Vec<Source>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum JsonSources {
        Bare(Vec<Source>),
        Wrapped { sources: Vec<Source> },
    }
    Ok(match serde_json::from_str::<JsonSources>(s)? {
        JsonSources::Bare(v) => v,
        JsonSources::Wrapped { sources } => sources,
    })
}
