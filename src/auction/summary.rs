//! Auction purse summary: spend, remaining budget and per-role counts.
//!
//! Amounts are whole lakhs.
//!
//! CHANGELOG:
//! - 10/19/2026 - Added summarize_value for untyped JSON input
//! - 10/19/2026 - Initial implementation

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// A team and its purse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub purse: u32,
}

/// A bought player. `role` is usually one of bat, bowl, ar, wk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub role: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSummary {
    pub team_name: String,
    pub total_spent: u64,
    pub remaining: i64,
    pub player_count: usize,
    pub costliest_player: Player,
    pub cheapest_player: Player,
    pub average_price: u64,
    pub by_role: BTreeMap<String, usize>,
    pub is_over_budget: bool,
}

#[derive(Debug, Error)]
pub enum AuctionError {
    #[error("team must be an object")]
    InvalidTeam,

    #[error("team purse must be a non-negative whole number")]
    InvalidPurse,

    #[error("players must be a non-empty array")]
    NoPlayers,

    #[error("player #{index} is malformed: {source}")]
    InvalidPlayer {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Summarize a team's auction spend.
pub fn summarize(team: &Team, players: &[Player]) -> Result<AuctionSummary, AuctionError> {
    let (first, rest) = players.split_first().ok_or(AuctionError::NoPlayers)?;

    let total_spent: u64 = players.iter().map(|p| u64::from(p.price)).sum();
    let player_count = players.len();

    // Ties go to the later player
    let costliest = rest
        .iter()
        .fold(first, |prev, curr| if prev.price > curr.price { prev } else { curr });
    let cheapest = rest
        .iter()
        .fold(first, |prev, curr| if prev.price < curr.price { prev } else { curr });

    let by_role = players.iter().fold(BTreeMap::new(), |mut acc, p| {
        *acc.entry(p.role.clone()).or_insert(0) += 1;
        acc
    });

    let purse = u64::from(team.purse);

    Ok(AuctionSummary {
        team_name: team.name.clone(),
        total_spent,
        remaining: purse as i64 - total_spent as i64,
        player_count,
        costliest_player: costliest.clone(),
        cheapest_player: cheapest.clone(),
        average_price: round_half_up(total_spent, player_count as u64),
        by_role,
        is_over_budget: total_spent > purse,
    })
}

/// Summarize from untyped JSON, validating shape along the way.
pub fn summarize_value(team: &Value, players: &Value) -> Result<AuctionSummary, AuctionError> {
    let team_obj = team.as_object().ok_or(AuctionError::InvalidTeam)?;

    let purse = team_obj
        .get("purse")
        .and_then(whole_number)
        .ok_or(AuctionError::InvalidPurse)?;

    let name = team_obj
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let entries = players
        .as_array()
        .filter(|arr| !arr.is_empty())
        .ok_or(AuctionError::NoPlayers)?;

    let players = entries
        .iter()
        .enumerate()
        .map(|(index, v)| {
            Player::deserialize(v).map_err(|source| AuctionError::InvalidPlayer { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    summarize(&Team { name, purse }, &players)
}

/// Accept integers and integral floats (9000 or 9000.0) that fit in u32.
fn whole_number(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= f64::from(u32::MAX))
        .map(|f| f as u32)
}

/// Serde form of `whole_number` for typed purse and price fields.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    whole_number(&value)
        .ok_or_else(|| de::Error::custom(format!("expected a non-negative whole number, got {}", value)))
}

fn round_half_up(total: u64, count: u64) -> u64 {
    (2 * total + count) / (2 * count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player(name: &str, role: &str, price: u32) -> Player {
        Player {
            name: name.to_string(),
            role: role.to_string(),
            price,
        }
    }

    #[test]
    fn test_csk_summary() {
        let team = Team { name: "CSK".to_string(), purse: 9000 };
        let players = vec![player("Dhoni", "wk", 1200), player("Jadeja", "ar", 1600)];
        let summary = summarize(&team, &players).unwrap();

        assert_eq!(summary.team_name, "CSK");
        assert_eq!(summary.total_spent, 2800);
        assert_eq!(summary.remaining, 6200);
        assert_eq!(summary.player_count, 2);
        assert_eq!(summary.costliest_player, players[1]);
        assert_eq!(summary.cheapest_player, players[0]);
        assert_eq!(summary.average_price, 1400);
        assert_eq!(summary.by_role.get("wk"), Some(&1));
        assert_eq!(summary.by_role.get("ar"), Some(&1));
        assert!(!summary.is_over_budget);
    }

    #[test]
    fn test_over_budget() {
        let team = Team { name: "RCB".to_string(), purse: 500 };
        let summary = summarize(&team, &[player("Kohli", "bat", 1700)]).unwrap();
        assert_eq!(summary.remaining, -1200);
        assert!(summary.is_over_budget);
        assert_eq!(summary.costliest_player.name, "Kohli");
        assert_eq!(summary.cheapest_player.name, "Kohli");
    }

    #[test]
    fn test_exact_budget_not_over() {
        let team = Team { name: "MI".to_string(), purse: 1000 };
        let summary = summarize(&team, &[player("Rohit", "bat", 1000)]).unwrap();
        assert_eq!(summary.remaining, 0);
        assert!(!summary.is_over_budget);
    }

    #[test]
    fn test_ties_pick_later_player() {
        let team = Team { name: "KKR".to_string(), purse: 5000 };
        let players = vec![player("A", "bat", 800), player("B", "bowl", 800)];
        let summary = summarize(&team, &players).unwrap();
        assert_eq!(summary.costliest_player.name, "B");
        assert_eq!(summary.cheapest_player.name, "B");
    }

    #[test]
    fn test_average_rounds_half_up() {
        let team = Team { name: "DC".to_string(), purse: 100 };
        let players = vec![player("A", "bat", 2), player("B", "bat", 3)];
        assert_eq!(summarize(&team, &players).unwrap().average_price, 3);

        let players = vec![player("A", "bat", 1), player("B", "bat", 1), player("C", "bat", 5)];
        assert_eq!(summarize(&team, &players).unwrap().average_price, 2);
    }

    #[test]
    fn test_by_role_counts() {
        let team = Team { name: "SRH".to_string(), purse: 9000 };
        let players = vec![
            player("A", "bat", 100),
            player("B", "bowl", 100),
            player("C", "bowl", 100),
            player("D", "ar", 100),
            player("E", "bat", 100),
        ];
        let summary = summarize(&team, &players).unwrap();
        let expected: BTreeMap<String, usize> =
            [("ar", 1), ("bat", 2), ("bowl", 2)].iter().map(|(k, v)| (k.to_string(), *v)).collect();
        assert_eq!(summary.by_role, expected);
    }

    #[test]
    fn test_empty_players_rejected() {
        let team = Team { name: "PBKS".to_string(), purse: 9000 };
        assert!(matches!(summarize(&team, &[]), Err(AuctionError::NoPlayers)));
    }

    #[test]
    fn test_value_validation() {
        let players = json!([{ "name": "Dhoni", "role": "wk", "price": 1200 }]);

        assert!(matches!(
            summarize_value(&json!("CSK"), &players),
            Err(AuctionError::InvalidTeam)
        ));
        assert!(matches!(
            summarize_value(&Value::Null, &players),
            Err(AuctionError::InvalidTeam)
        ));
        assert!(matches!(
            summarize_value(&json!({ "name": "CSK", "purse": -5 }), &players),
            Err(AuctionError::InvalidPurse)
        ));
        assert!(matches!(
            summarize_value(&json!({ "name": "CSK", "purse": "9000" }), &players),
            Err(AuctionError::InvalidPurse)
        ));
        assert!(matches!(
            summarize_value(&json!({ "name": "CSK" }), &players),
            Err(AuctionError::InvalidPurse)
        ));
        assert!(matches!(
            summarize_value(&json!({ "name": "CSK", "purse": 9000 }), &json!([])),
            Err(AuctionError::NoPlayers)
        ));
        assert!(matches!(
            summarize_value(&json!({ "name": "CSK", "purse": 9000 }), &json!({})),
            Err(AuctionError::NoPlayers)
        ));
        assert!(matches!(
            summarize_value(
                &json!({ "name": "CSK", "purse": 9000 }),
                &json!([{ "name": "Dhoni", "role": "wk", "price": 1200 }, { "name": "X" }])
            ),
            Err(AuctionError::InvalidPlayer { index: 1, .. })
        ));
    }

    #[test]
    fn test_value_accepts_zero_and_integral_float_purse() {
        let players = json!([{ "name": "Dhoni", "role": "wk", "price": 1200 }]);

        let summary = summarize_value(&json!({ "name": "CSK", "purse": 0 }), &players).unwrap();
        assert!(summary.is_over_budget);

        let summary = summarize_value(&json!({ "name": "CSK", "purse": 9000.0 }), &players).unwrap();
        assert_eq!(summary.remaining, 7800);

        assert!(matches!(
            summarize_value(&json!({ "name": "CSK", "purse": 90.5 }), &players),
            Err(AuctionError::InvalidPurse)
        ));
    }

    #[test]
    fn test_value_accepts_integral_float_prices() {
        let summary = summarize_value(
            &json!({ "name": "CSK", "purse": 9000.0 }),
            &json!([
                { "name": "Dhoni", "role": "wk", "price": 1200.0 },
                { "name": "Jadeja", "role": "ar", "price": 1600 }
            ]),
        )
        .unwrap();
        assert_eq!(summary.total_spent, 2800);
        assert_eq!(summary.costliest_player.name, "Jadeja");
        assert_eq!(summary.cheapest_player.price, 1200);

        for bad in [json!(1200.5), json!(-1), json!("1200")] {
            assert!(matches!(
                summarize_value(
                    &json!({ "name": "CSK", "purse": 9000 }),
                    &json!([{ "name": "Dhoni", "role": "wk", "price": bad }])
                ),
                Err(AuctionError::InvalidPlayer { index: 0, .. })
            ));
        }
    }

    #[test]
    fn test_serialized_shape() {
        let summary = summarize_value(
            &json!({ "name": "CSK", "purse": 9000 }),
            &json!([
                { "name": "Dhoni", "role": "wk", "price": 1200 },
                { "name": "Jadeja", "role": "ar", "price": 1600 }
            ]),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "teamName": "CSK",
                "totalSpent": 2800,
                "remaining": 6200,
                "playerCount": 2,
                "costliestPlayer": { "name": "Jadeja", "role": "ar", "price": 1600 },
                "cheapestPlayer": { "name": "Dhoni", "role": "wk", "price": 1200 },
                "averagePrice": 1400,
                "byRole": { "ar": 1, "wk": 1 },
                "isOverBudget": false
            })
        );
    }
}
