//! Open broker order snapshots

use serde::{Deserialize, Serialize};

/// An order resting at the broker, linked to a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub id: i64,
    pub portfolio_id: i64,
    pub contract_id: i64,
    pub symbol: String,
    /// BUY or SELL
    pub action: String,
    pub quantity: f64,
    pub limit_price: Option<f64>,
    pub status: String,
}
