//! Positional parser for WhatsApp exported chat lines.
//!
//! Export format:
//!   `DD/MM/YYYY, HH:MM - Sender Name: Message text here`
//!
//! Fields are cut at the first `", "`, then the first `" - "` after it,
//! then the first `": "` after that. Anything following the last separator
//! is message text, so colons inside the message are kept.
//!
//! CHANGELOG:
//! - 10/19/2026 - Added timestamp() helper for 24h/12h export variants
//! - 10/19/2026 - Added parse_value/parse_bytes for untyped input
//! - 10/19/2026 - Initial implementation

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

use super::sentiment::{self, Sentiment, SentimentLexicon};

pub const DATE_SEPARATOR: &str = ", ";
pub const TIME_SEPARATOR: &str = " - ";
pub const SENDER_SEPARATOR: &str = ": ";

const DATE_FORMATS: &[&str] = &["%d/%m/%y", "%d/%m/%Y"];
const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%I:%M %p"];

/// Why a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was not text (non-string JSON value, invalid UTF-8).
    #[error("input is not text")]
    InvalidInput,

    /// A required separator was not found.
    #[error("malformed line: missing {missing:?} separator")]
    MalformedLine { missing: &'static str },
}

/// One parsed chat line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMessage {
    date: String,
    time: String,
    sender: String,
    text: String,
    word_count: usize,
    sentiment: Sentiment,
}

impl ParsedMessage {
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    /// Interpret `date` and `time` as a local timestamp.
    ///
    /// Accepts `DD/MM/YY` or `DD/MM/YYYY` dates and `HH:MM`, `HH:MM:SS` or
    /// `hh:MM am/pm` times. Returns None when either token doesn't match.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&self.date, fmt).ok())?;
        let time = TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(&self.time, fmt).ok())?;
        Some(date.and_time(time))
    }
}

impl FromStr for ParsedMessage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse a chat line using the built-in sentiment sets.
pub fn parse(line: &str) -> Result<ParsedMessage, ParseError> {
    parse_fields(line, sentiment::classify)
}

/// Parse a chat line, classifying sentiment with a custom lexicon.
pub fn parse_with(line: &str, lexicon: &SentimentLexicon) -> Result<ParsedMessage, ParseError> {
    parse_fields(line, |text| lexicon.classify(text))
}

/// Parse a chat line, returning None on any rejection.
pub fn parse_opt(line: &str) -> Option<ParsedMessage> {
    parse(line).ok()
}

/// Parse an untyped JSON value. Anything but a string is `InvalidInput`.
pub fn parse_value(value: &Value) -> Result<ParsedMessage, ParseError> {
    match value {
        Value::String(line) => parse(line),
        _ => Err(ParseError::InvalidInput),
    }
}

/// Parse raw bytes. Invalid UTF-8 is `InvalidInput`.
pub fn parse_bytes(bytes: &[u8], lexicon: &SentimentLexicon) -> Result<ParsedMessage, ParseError> {
    let line = std::str::from_utf8(bytes).map_err(|_| ParseError::InvalidInput)?;
    parse_with(line, lexicon)
}

/// Count non-empty tokens when splitting on single spaces.
pub fn count_words(text: &str) -> usize {
    text.split(' ').filter(|word| !word.is_empty()).count()
}

fn parse_fields<C>(line: &str, classify: C) -> Result<ParsedMessage, ParseError>
where
    C: Fn(&str) -> Sentiment,
{
    // A line without ", " has an empty date and the time starts at 0
    let (date, rest) = line.split_once(DATE_SEPARATOR).unwrap_or(("", line));

    let (time, rest) = rest
        .split_once(TIME_SEPARATOR)
        .ok_or(ParseError::MalformedLine { missing: TIME_SEPARATOR })?;

    let (sender, body) = rest
        .split_once(SENDER_SEPARATOR)
        .ok_or(ParseError::MalformedLine { missing: SENDER_SEPARATOR })?;

    let text = body.trim();

    Ok(ParsedMessage {
        date: date.to_string(),
        time: time.trim().to_string(),
        sender: sender.to_string(),
        text: text.to_string(),
        word_count: count_words(text),
        sentiment: classify(text),
    })
}
