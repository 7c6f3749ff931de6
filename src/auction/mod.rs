//! Auction purse accounting.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial module structure

pub mod summary;

pub use summary::{summarize, summarize_value, AuctionError, AuctionSummary, Player, Team};
