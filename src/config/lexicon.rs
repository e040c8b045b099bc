// src/config/lexicon.rs
use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing::info;

use crate::lexicon::SentimentLexicon;

pub const ENV_LEXICON_PATH: &str = "BIAS_LEXICON_PATH";

/// Built-in lexicon, optionally extended by a JSON file:
/// 1) $BIAS_LEXICON_PATH (must exist)
/// 2) config/lexicon.json
/// 3) built-in only
pub fn load_lexicon_default() -> Result<SentimentLexicon> {
    let path = match std::env::var(ENV_LEXICON_PATH) {
        Ok(p) => {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_LEXICON_PATH} points to non-existent path"));
            }
            Some(pb)
        }
        Err(_) => Some(PathBuf::from("config/lexicon.json")).filter(|p| p.exists()),
    };

    let mut lex = SentimentLexicon::builtin();
    if let Some(p) = path {
        lex.extend_from_file(&p)?;
        info!(path = %p.display(), words = lex.len(), "lexicon extended from file");
    }
    Ok(lex)
}
