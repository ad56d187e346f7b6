//! Contracts and their security-type specific data
//!
//! The backing schema keeps subtype tables sharing the contract's primary
//! key; in memory the subtype data is a tagged union keyed by security type,
//! so a contract can never carry fields of the wrong kind.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Security type of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityType {
    Stock,
    Option,
    Future,
    Bond,
    Cash,
    Index,
    Bag,
}

impl SecurityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityType::Stock => "stock",
            SecurityType::Option => "option",
            SecurityType::Future => "future",
            SecurityType::Bond => "bond",
            SecurityType::Cash => "cash",
            SecurityType::Index => "index",
            SecurityType::Bag => "bag",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stock" => Some(SecurityType::Stock),
            "option" => Some(SecurityType::Option),
            "future" => Some(SecurityType::Future),
            "bond" => Some(SecurityType::Bond),
            "cash" => Some(SecurityType::Cash),
            "index" => Some(SecurityType::Index),
            "bag" => Some(SecurityType::Bag),
            _ => None,
        }
    }
}

/// Call/put side of an option contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSide {
    Call,
    Put,
}

impl OptionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionSide::Call => "call",
            OptionSide::Put => "put",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "call" | "C" => Some(OptionSide::Call),
            "put" | "P" => Some(OptionSide::Put),
            _ => None,
        }
    }
}

/// Security-type specific contract data, joined by the contract id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "security_type", rename_all = "snake_case")]
pub enum ContractDetails {
    Stock,
    Option {
        underlying_id: Option<i64>,
        underlying_symbol: String,
        expiry: NaiveDate,
        strike: f64,
        side: OptionSide,
        multiplier: f64,
        delta: Option<f64>,
        /// Live price of the underlying, filled in when positions are read
        underlying_price: Option<f64>,
    },
    Future {
        underlying_id: Option<i64>,
        expiry: NaiveDate,
        multiplier: f64,
    },
    Bond {
        maturity: NaiveDate,
        coupon: Option<f64>,
    },
    Cash,
    Index,
    Bag,
}

impl ContractDetails {
    pub fn security_type(&self) -> SecurityType {
        match self {
            ContractDetails::Stock => SecurityType::Stock,
            ContractDetails::Option { .. } => SecurityType::Option,
            ContractDetails::Future { .. } => SecurityType::Future,
            ContractDetails::Bond { .. } => SecurityType::Bond,
            ContractDetails::Cash => SecurityType::Cash,
            ContractDetails::Index => SecurityType::Index,
            ContractDetails::Bag => SecurityType::Bag,
        }
    }
}

/// A tradable contract with its latest known prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: i64,
    pub symbol: String,
    pub exchange: Option<String>,
    pub currency: String,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: Option<f64>,
    pub previous_close: Option<f64>,
    pub price_updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub details: ContractDetails,
}

impl Contract {
    pub fn security_type(&self) -> SecurityType {
        self.details.security_type()
    }
}

/// Days from `today` until `expiry`; negative once expired
pub fn days_to_expiration(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// Best available live price: bid/ask midpoint, then last, then previous close
pub fn live_price(contract: &Contract) -> Option<f64> {
    best_price(
        contract.bid,
        contract.ask,
        contract.last,
        contract.previous_close,
    )
}

/// Same averaging over raw price fields
pub fn best_price(
    bid: Option<f64>,
    ask: Option<f64>,
    last: Option<f64>,
    previous_close: Option<f64>,
) -> Option<f64> {
    match (bid, ask) {
        (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
        _ => last.or(previous_close),
    }
}
