//! Positions and cash balances

use crate::models::contract::Contract;
use serde::{Deserialize, Serialize};

/// Current net holding of a contract within a portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: i64,
    pub portfolio_id: i64,
    pub contract: Contract,
    pub quantity: f64,
    /// Accumulated cost in contract currency
    pub cost_basis: f64,
    /// FX rate from contract currency to the portfolio's base currency
    pub base_rate: f64,
}

/// Average entry price, cost divided by quantity
pub fn average_price(position: &Position) -> Option<f64> {
    if position.quantity == 0.0 {
        None
    } else {
        Some(position.cost_basis / position.quantity)
    }
}

/// Cash balance in one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub id: i64,
    pub portfolio_id: i64,
    pub currency: String,
    pub quantity: f64,
}
