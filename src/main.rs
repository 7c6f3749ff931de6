//! chatline - Fast Rust CLI for WhatsApp chat exports
//!
//! Parses exported chat lines into structured messages and summarizes
//! auction purse sheets.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial CLI with parse and auction commands

use chatline::{commands, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Fast Rust CLI for WhatsApp chat exports.
#[derive(Parser, Debug)]
#[command(name = "chatline")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Comma-separated field allowlist
    #[arg(long, global = true)]
    fields: Option<String>,

    /// Truncate text fields to this length
    #[arg(long, global = true)]
    max_text_chars: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse exported chat lines (file, stdin, or --line)
    Parse {
        /// Chat export file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Parse this line instead of reading input (repeatable)
        #[arg(short, long = "line", conflicts_with = "file")]
        lines: Vec<String>,

        /// Sentiment lexicon JSON file
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Fail on the first line that cannot be parsed
        #[arg(long)]
        strict: bool,
    },

    /// Summarize an auction sheet ({"team": {...}, "players": [...]})
    Auction {
        /// Auction sheet JSON file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    // Compact implies JSON
    let output_controls = output::OutputControls {
        json: cli.json || cli.compact,
        compact: cli.compact,
        fields: cli.fields.clone(),
        max_text_chars: cli.max_text_chars,
    };

    let result = match cli.command {
        Command::Parse { file, lines, lexicon, strict } => commands::parse::run(
            file.as_deref(),
            &lines,
            lexicon.as_deref(),
            strict,
            &output_controls,
        ),
        Command::Auction { file } => commands::auction::run(&file, &output_controls),
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if output_controls.json {
                eprintln!("{}", output::format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}
