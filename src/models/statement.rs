//! Brokerage statements: immutable ledger line items

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Type-specific statement payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "statement_type", rename_all = "snake_case")]
pub enum StatementKind {
    Equity {
        quantity: f64,
        price: Option<f64>,
        proceeds: Option<f64>,
        fees: Option<f64>,
        realized_pnl: Option<f64>,
    },
    #[serde(rename = "option")]
    OptionTrade {
        quantity: f64,
        price: Option<f64>,
        proceeds: Option<f64>,
        fees: Option<f64>,
        realized_pnl: Option<f64>,
    },
    Dividend {
        country: Option<String>,
    },
    Tax {
        country: Option<String>,
    },
    Interest,
    Fee,
    CorporateAction,
    Other,
}

impl StatementKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            StatementKind::Equity { .. } => "equity",
            StatementKind::OptionTrade { .. } => "option",
            StatementKind::Dividend { .. } => "dividend",
            StatementKind::Tax { .. } => "tax",
            StatementKind::Interest => "interest",
            StatementKind::Fee => "fee",
            StatementKind::CorporateAction => "corporate_action",
            StatementKind::Other => "other",
        }
    }

    /// Realized P&L carried by trade-type statements
    pub fn realized_pnl(&self) -> Option<f64> {
        match self {
            StatementKind::Equity { realized_pnl, .. }
            | StatementKind::OptionTrade { realized_pnl, .. } => *realized_pnl,
            _ => None,
        }
    }
}

/// One ledger entry from the brokerage feed.
///
/// Belongs to exactly one portfolio; `trade_id` stays NULL until the entry is
/// linked to a trade (created, guessed, or added explicitly).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub id: i64,
    pub portfolio_id: i64,
    pub trade_id: Option<i64>,
    pub contract_id: Option<i64>,
    pub date: NaiveDate,
    pub currency: String,
    /// Amount in statement currency
    pub amount: f64,
    /// FX rate from statement currency to the portfolio's base currency
    pub fx_rate: f64,
    pub description: String,
    #[serde(flatten)]
    pub kind: StatementKind,
}

impl Statement {
    /// Amount converted to the portfolio's base currency
    pub fn base_amount(&self) -> f64 {
        self.amount * self.fx_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_wire_shape() {
        let s = Statement {
            id: 3,
            portfolio_id: 1,
            trade_id: None,
            contract_id: Some(9),
            date: NaiveDate::from_ymd_opt(2026, 2, 17).unwrap(),
            currency: "EUR".to_string(),
            amount: 120.0,
            fx_rate: 1.08,
            description: "ACME dividend".to_string(),
            kind: StatementKind::Dividend {
                country: Some("US".to_string()),
            },
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["statement_type"], "dividend");
        assert_eq!(v["country"], "US");
        assert!(v["trade_id"].is_null());
        let back: Statement = serde_json::from_value(v).unwrap();
        assert_eq!(back, s);
        assert!((back.base_amount() - 129.6).abs() < 1e-9);
    }
}
