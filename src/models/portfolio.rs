//! Portfolios and their per-underlying strategy settings

use serde::{Deserialize, Serialize};

/// What to do with idle cash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashStrategy {
    Deposit,
    Balance,
}

impl CashStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CashStrategy::Deposit => "deposit",
            CashStrategy::Balance => "balance",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "deposit" => Some(CashStrategy::Deposit),
            "balance" => Some(CashStrategy::Balance),
            _ => None,
        }
    }
}

/// A brokerage account being tracked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: i64,
    pub name: String,
    pub account: String,
    pub base_currency: String,
    pub benchmark_symbol: Option<String>,
    pub cash_strategy: CashStrategy,
    pub country: Option<String>,
    /// Filled when the portfolio is fetched as an item, empty in lists
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<Setting>,
}

/// Per-portfolio, per-underlying option strategy parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub id: i64,
    pub portfolio_id: i64,
    /// Underlying symbol these parameters apply to
    pub symbol: String,
    /// Target share of portfolio NAV for this underlying
    pub nav_ratio: f64,
    /// Cash-secured-put strategy selector (0 = off)
    pub csp_strategy: i32,
    /// Covered-call strategy selector (0 = off)
    pub cc_strategy: i32,
    pub csp_delta: f64,
    pub cc_delta: f64,
    /// Roll short puts when DTE drops below this
    pub roll_put_days: i32,
    /// Roll short calls when DTE drops below this
    pub roll_call_days: i32,
}
