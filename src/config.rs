//! Sentiment lexicon configuration.
//!
//! CHANGELOG:
//! - 10/19/2026 - Reject lexicons with empty tokens
//! - 10/19/2026 - Initial implementation

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::whatsapp::SentimentLexicon;

/// Env var pointing at a lexicon JSON file.
pub const LEXICON_PATH_ENV: &str = "CHATLINE_LEXICON_PATH";

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("lexicon file {path:?} has an empty {set} token")]
    EmptyToken { path: PathBuf, set: &'static str },
}

/// Default lexicon path, if one is configured.
///
/// Tries in order:
/// 1. CHATLINE_LEXICON_PATH env var
/// 2. <config dir>/chatline/lexicon.json, when the file exists
pub fn default_lexicon_path() -> Option<PathBuf> {
    lexicon_path_from(std::env::var(LEXICON_PATH_ENV).ok(), dirs::config_dir())
}

/// Pick the lexicon path from an env value and a config directory.
fn lexicon_path_from(env_value: Option<String>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = env_value.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    config_dir
        .map(|dir| dir.join("chatline").join("lexicon.json"))
        .filter(|path| path.exists())
}

/// Load a lexicon from a JSON file (`{"funny": [...], "love": [...]}`).
pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<SentimentLexicon, LexiconError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let lexicon: SentimentLexicon =
        serde_json::from_str(&content).map_err(|source| LexiconError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(set) = lexicon.empty_token_set() {
        return Err(LexiconError::EmptyToken {
            path: path.to_path_buf(),
            set,
        });
    }

    Ok(lexicon)
}

/// Resolve the lexicon to use: explicit path, then default path, then built-in.
pub fn resolve_lexicon(explicit: Option<&Path>) -> Result<SentimentLexicon, LexiconError> {
    let path = explicit.map(Path::to_path_buf).or_else(default_lexicon_path);
    lexicon_at(path)
}

fn lexicon_at(path: Option<PathBuf>) -> Result<SentimentLexicon, LexiconError> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading sentiment lexicon");
            load_lexicon(&path)
        }
        None => {
            tracing::debug!("using built-in sentiment lexicon");
            Ok(SentimentLexicon::default())
        }
    }
}
