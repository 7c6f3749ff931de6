//! Auction command: summarize a team's purse from a JSON sheet.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::auction::{self, AuctionSummary};
use crate::output::OutputControls;

/// Summarize a sheet of the form `{"team": {...}, "players": [...]}`.
pub fn summarize_sheet(content: &str) -> Result<AuctionSummary> {
    let sheet: Value = serde_json::from_str(content).context("Failed to parse auction sheet JSON")?;
    let summary = auction::summarize_value(&sheet["team"], &sheet["players"])?;
    Ok(summary)
}

/// Print the purse summary for an auction sheet file.
pub fn run(file: &Path, output: &OutputControls) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read auction sheet: {:?}", file))?;

    let summary = summarize_sheet(&content)?;
    tracing::debug!(team = %summary.team_name, players = summary.player_count, "auction summarized");

    if output.json {
        output.print(&summary);
        return Ok(());
    }

    println!("Auction Summary: {}", summary.team_name);
    println!("{:-<40}", "");
    println!("total_spent: {}", summary.total_spent);
    println!("remaining: {}", summary.remaining);
    println!("player_count: {}", summary.player_count);
    println!(
        "costliest_player: {} ({}, {})",
        summary.costliest_player.name, summary.costliest_player.role, summary.costliest_player.price
    );
    println!(
        "cheapest_player: {} ({}, {})",
        summary.cheapest_player.name, summary.cheapest_player.role, summary.cheapest_player.price
    );
    println!("average_price: {}", summary.average_price);
    println!("by_role:");
    for (role, count) in &summary.by_role {
        println!("  {}: {}", role, count);
    }
    if summary.is_over_budget {
        println!("OVER BUDGET by {}", -summary.remaining);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_sheet() {
        let sheet = r#"{
            "team": { "name": "RCB", "purse": 500 },
            "players": [{ "name": "Kohli", "role": "bat", "price": 1700 }]
        }"#;
        let summary = summarize_sheet(sheet).unwrap();
        assert_eq!(summary.remaining, -1200);
        assert!(summary.is_over_budget);
    }

    #[test]
    fn test_summarize_sheet_missing_sections() {
        let err = summarize_sheet(r#"{ "players": [] }"#).unwrap_err();
        assert_eq!(err.to_string(), "team must be an object");

        let err = summarize_sheet(r#"{ "team": { "name": "CSK", "purse": 9000 } }"#).unwrap_err();
        assert_eq!(err.to_string(), "players must be a non-empty array");
    }

    #[test]
    fn test_summarize_sheet_bad_json() {
        assert!(summarize_sheet("not json").is_err());
    }
}
