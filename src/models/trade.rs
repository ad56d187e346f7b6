//! Trades: user-defined groupings of statements, one per strategy instance

use crate::models::statement::Statement;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Strategy behind a trade. Serialized as its numeric code, which is also
/// what edit forms submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum TradeStrategy {
    Undefined,
    LongStock,
    ShortStock,
    TheWheel,
    CashSecuredPut,
    CoveredCall,
    NakedPut,
    NakedCall,
    VerticalSpread,
    IronCondor,
    Strangle,
    Straddle,
    BoxSpread,
}

impl TradeStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            TradeStrategy::Undefined => "undefined",
            TradeStrategy::LongStock => "long stock",
            TradeStrategy::ShortStock => "short stock",
            TradeStrategy::TheWheel => "the wheel",
            TradeStrategy::CashSecuredPut => "cash secured put",
            TradeStrategy::CoveredCall => "covered call",
            TradeStrategy::NakedPut => "naked put",
            TradeStrategy::NakedCall => "naked call",
            TradeStrategy::VerticalSpread => "vertical spread",
            TradeStrategy::IronCondor => "iron condor",
            TradeStrategy::Strangle => "strangle",
            TradeStrategy::Straddle => "straddle",
            TradeStrategy::BoxSpread => "box spread",
        }
    }

    pub const ALL: [TradeStrategy; 13] = [
        TradeStrategy::Undefined,
        TradeStrategy::LongStock,
        TradeStrategy::ShortStock,
        TradeStrategy::TheWheel,
        TradeStrategy::CashSecuredPut,
        TradeStrategy::CoveredCall,
        TradeStrategy::NakedPut,
        TradeStrategy::NakedCall,
        TradeStrategy::VerticalSpread,
        TradeStrategy::IronCondor,
        TradeStrategy::Strangle,
        TradeStrategy::Straddle,
        TradeStrategy::BoxSpread,
    ];
}

impl From<TradeStrategy> for i32 {
    fn from(s: TradeStrategy) -> i32 {
        match s {
            TradeStrategy::Undefined => 0,
            TradeStrategy::LongStock => 1,
            TradeStrategy::ShortStock => 2,
            TradeStrategy::TheWheel => 3,
            TradeStrategy::CashSecuredPut => 4,
            TradeStrategy::CoveredCall => 5,
            TradeStrategy::NakedPut => 6,
            TradeStrategy::NakedCall => 7,
            TradeStrategy::VerticalSpread => 8,
            TradeStrategy::IronCondor => 9,
            TradeStrategy::Strangle => 10,
            TradeStrategy::Straddle => 11,
            TradeStrategy::BoxSpread => 12,
        }
    }
}

impl TryFrom<i32> for TradeStrategy {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TradeStrategy::Undefined),
            1 => Ok(TradeStrategy::LongStock),
            2 => Ok(TradeStrategy::ShortStock),
            3 => Ok(TradeStrategy::TheWheel),
            4 => Ok(TradeStrategy::CashSecuredPut),
            5 => Ok(TradeStrategy::CoveredCall),
            6 => Ok(TradeStrategy::NakedPut),
            7 => Ok(TradeStrategy::NakedCall),
            8 => Ok(TradeStrategy::VerticalSpread),
            9 => Ok(TradeStrategy::IronCondor),
            10 => Ok(TradeStrategy::Strangle),
            11 => Ok(TradeStrategy::Straddle),
            12 => Ok(TradeStrategy::BoxSpread),
            other => Err(format!("unknown trade strategy code: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeStatus {
    Open,
    Closed,
}

impl TradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeStatus::Open => "open",
            TradeStatus::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(TradeStatus::Open),
            "closed" => Some(TradeStatus::Closed),
            _ => None,
        }
    }
}

/// One strategy instance grouping a set of statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: i64,
    pub portfolio_id: i64,
    /// Underlying symbol of the strategy
    pub symbol: String,
    pub strategy: TradeStrategy,
    pub status: TradeStatus,
    pub opened_at: NaiveDate,
    pub closed_at: Option<NaiveDate>,
    pub comment: Option<String>,
    /// Capital at risk, when the user recorded it
    pub risk: Option<f64>,
    /// Sum of linked statements' amounts in base currency
    pub pnl: f64,
    /// Linked statements, filled when the trade is fetched as an item
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statements: Vec<Statement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_codes_round_trip() {
        for s in TradeStrategy::ALL {
            assert_eq!(TradeStrategy::try_from(i32::from(s)).unwrap(), s);
        }
        assert!(TradeStrategy::try_from(99).is_err());
    }

    #[test]
    fn test_strategy_serializes_as_number() {
        let v = serde_json::to_value(TradeStrategy::TheWheel).unwrap();
        assert_eq!(v, serde_json::json!(3));
    }
}
