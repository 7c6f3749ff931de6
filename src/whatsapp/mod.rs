//! WhatsApp chat export parsing.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial module structure

pub mod parser;
pub mod sentiment;

pub use parser::{
    count_words, parse, parse_bytes, parse_opt, parse_value, parse_with, ParseError,
    ParsedMessage,
};
pub use sentiment::{classify, Sentiment, SentimentLexicon};
