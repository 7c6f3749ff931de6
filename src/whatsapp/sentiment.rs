//! Coarse sentiment tagging for chat message text.
//!
//! Matching is a case-insensitive substring scan against two token sets.
//! The funny set is checked first, so a message that hits both sets is
//! always tagged `funny`.
//!
//! CHANGELOG:
//! - 10/19/2026 - Configurable lexicon with lowercase token matching
//! - 10/19/2026 - Initial implementation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tokens that mark a message as funny.
pub const DEFAULT_FUNNY: &[&str] = &["😂", ":)", "haha"];

/// Tokens that mark a message as affectionate.
pub const DEFAULT_LOVE: &[&str] = &["❤", "love", "pyaar"];

/// Sentiment tag attached to a parsed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Funny,
    Love,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Funny => "funny",
            Sentiment::Love => "love",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token sets used for classification.
///
/// Deserializes from `{"funny": [...], "love": [...]}`; a missing key keeps
/// the built-in set for that sentiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentLexicon {
    #[serde(default = "default_funny")]
    pub funny: Vec<String>,
    #[serde(default = "default_love")]
    pub love: Vec<String>,
}

fn default_funny() -> Vec<String> {
    DEFAULT_FUNNY.iter().map(|t| t.to_string()).collect()
}

fn default_love() -> Vec<String> {
    DEFAULT_LOVE.iter().map(|t| t.to_string()).collect()
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self {
            funny: default_funny(),
            love: default_love(),
        }
    }
}

impl SentimentLexicon {
    /// Classify text against this lexicon.
    pub fn classify(&self, text: &str) -> Sentiment {
        classify_against(text, &self.funny, &self.love)
    }

    /// Name of the first token set holding an empty token, if any.
    ///
    /// An empty token would match every message.
    pub fn empty_token_set(&self) -> Option<&'static str> {
        if self.funny.iter().any(|t| t.is_empty()) {
            Some("funny")
        } else if self.love.iter().any(|t| t.is_empty()) {
            Some("love")
        } else {
            None
        }
    }
}

/// Classify text with the built-in token sets.
pub fn classify(text: &str) -> Sentiment {
    classify_against(text, DEFAULT_FUNNY, DEFAULT_LOVE)
}

fn classify_against<F, L>(text: &str, funny: &[F], love: &[L]) -> Sentiment
where
    F: AsRef<str>,
    L: AsRef<str>,
{
    let lower = text.to_lowercase();
    let hit = |token: &str| lower.contains(&token.to_lowercase());

    if funny.iter().any(|t| hit(t.as_ref())) {
        Sentiment::Funny
    } else if love.iter().any(|t| hit(t.as_ref())) {
        Sentiment::Love
    } else {
        Sentiment::Neutral
    }
}
