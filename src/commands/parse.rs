//! Parse command: turn exported chat lines into structured messages.
//!
//! CHANGELOG:
//! - 10/19/2026 - Timestamp in JSON and text output; --line values keep their own numbers
//! - 10/19/2026 - Added --strict and per-sentiment tallies
//! - 10/19/2026 - Initial implementation

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config;
use crate::output::OutputControls;
use crate::whatsapp::{self, ParsedMessage, Sentiment, SentimentLexicon};

/// A line that could not be parsed.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedLine {
    pub line_number: usize,
    pub reason: String,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct SentimentTally {
    pub funny: usize,
    pub love: usize,
    pub neutral: usize,
}

impl SentimentTally {
    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Funny => self.funny += 1,
            Sentiment::Love => self.love += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ParseReport {
    pub messages: Vec<ParsedMessage>,
    pub rejected: Vec<RejectedLine>,
    pub sentiment: SentimentTally,
}

/// A message as printed: the parsed fields plus its timestamp, when readable.
#[derive(Debug, Serialize)]
struct MessageView<'a> {
    #[serde(flatten)]
    message: &'a ParsedMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<NaiveDateTime>,
}

impl<'a> MessageView<'a> {
    fn new(message: &'a ParsedMessage) -> Self {
        Self {
            message,
            timestamp: message.timestamp(),
        }
    }
}

/// JSON shape of the report, with output controls applied per message.
#[derive(Debug, Serialize)]
struct ParseReportView<'a> {
    messages: Vec<Value>,
    rejected: &'a [RejectedLine],
    sentiment: &'a SentimentTally,
}

/// Parse every line from a reader.
pub fn parse_source<R: BufRead>(
    reader: R,
    lexicon: &SentimentLexicon,
    strict: bool,
) -> Result<ParseReport> {
    parse_chunks(reader.split(b'\n'), lexicon, strict)
}

/// Parse `--line` values. Each value is one line, even if it holds a newline.
pub fn parse_lines(lines: &[String], lexicon: &SentimentLexicon, strict: bool) -> Result<ParseReport> {
    parse_chunks(lines.iter().map(|l| Ok::<_, io::Error>(l.as_bytes().to_vec())), lexicon, strict)
}

/// Blank lines are skipped. In strict mode the first rejected line is an error.
fn parse_chunks<I>(chunks: I, lexicon: &SentimentLexicon, strict: bool) -> Result<ParseReport>
where
    I: IntoIterator<Item = io::Result<Vec<u8>>>,
{
    let mut report = ParseReport::default();

    for (idx, chunk) in chunks.into_iter().enumerate() {
        let line_number = idx + 1;
        let mut bytes = chunk.with_context(|| format!("Failed to read line {}", line_number))?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        if bytes.is_empty() {
            continue;
        }

        match whatsapp::parse_bytes(&bytes, lexicon) {
            Ok(message) => {
                report.sentiment.record(message.sentiment());
                report.messages.push(message);
            }
            Err(e) if strict => return Err(anyhow!("line {}: {}", line_number, e)),
            Err(e) => {
                tracing::warn!(line = line_number, error = %e, "skipping line");
                report.rejected.push(RejectedLine {
                    line_number,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Parse chat lines from `--line` values, a file, or stdin.
pub fn run(
    file: Option<&Path>,
    lines: &[String],
    lexicon_path: Option<&Path>,
    strict: bool,
    output: &OutputControls,
) -> Result<()> {
    let lexicon = config::resolve_lexicon(lexicon_path)?;

    let report = if !lines.is_empty() {
        parse_lines(lines, &lexicon, strict)?
    } else if let Some(path) = file {
        let file = File::open(path)
            .with_context(|| format!("Failed to open chat export: {:?}", path))?;
        parse_source(BufReader::new(file), &lexicon, strict)?
    } else {
        parse_source(io::stdin().lock(), &lexicon, strict)?
    };

    tracing::debug!(
        parsed = report.messages.len(),
        rejected = report.rejected.len(),
        "parse finished"
    );

    if output.json {
        let view = ParseReportView {
            messages: report
                .messages
                .iter()
                .map(|m| output.project(&MessageView::new(m)))
                .collect(),
            rejected: &report.rejected,
            sentiment: &report.sentiment,
        };
        println!("{}", output.render(&serde_json::to_value(&view)?));
    } else {
        print_text(&report, output);
    }

    Ok(())
}

fn print_text(report: &ParseReport, output: &OutputControls) {
    for m in &report.messages {
        let when = match m.timestamp() {
            Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
            None => format!("{} {}", m.date(), m.time()),
        };
        println!(
            "[{}] {} ({}, {} words): {}",
            when,
            m.sender(),
            m.sentiment(),
            m.word_count(),
            output.preview(m.text())
        );
    }

    println!("{:-<60}", "");
    println!(
        "{} messages: {} funny, {} love, {} neutral",
        report.messages.len(),
        report.sentiment.funny,
        report.sentiment.love,
        report.sentiment.neutral
    );

    if !report.rejected.is_empty() {
        println!();
        println!("Rejected Lines ({}):", report.rejected.len());
        for r in &report.rejected {
            println!("  line {}: {}", r.line_number, r.reason);
        }
    }
}
