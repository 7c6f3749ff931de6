//! chatline library
//!
//! WhatsApp export line parsing with sentiment tagging, plus auction purse
//! summaries. Used by the `chatline` binary.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial library structure

pub mod auction;
pub mod commands;
pub mod config;
pub mod output;
pub mod whatsapp;

pub use whatsapp::{parse, ParseError, ParsedMessage, Sentiment};
