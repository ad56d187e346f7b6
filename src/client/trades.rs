//! Trade loaders and save/delete actions

use crate::client::{unwrap_envelope, ApiClient};
use crate::error::Result;
use crate::models::{PeriodWindow, Trade, TradeStatus, TradeStrategy};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub fn summary_path(portfolio_id: i64, window: PeriodWindow) -> String {
    format!(
        "/api/portfolio/{}/trades/summary/{}",
        portfolio_id,
        window.as_str()
    )
}

pub fn item_path(portfolio_id: i64, trade_id: i64) -> String {
    format!("/api/portfolio/{}/trades/id/{}", portfolio_id, trade_id)
}

/// Editable trade fields as sent to the API. Numeric fields are numbers on
/// the wire; coercion from form strings happens before this is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSave {
    pub strategy: TradeStrategy,
    pub status: TradeStatus,
    pub closed_at: Option<NaiveDate>,
    pub comment: Option<String>,
    pub risk: Option<f64>,
}

pub async fn fetch_trades(
    api: &ApiClient,
    portfolio_id: i64,
    window: PeriodWindow,
) -> Result<Vec<Trade>> {
    let body = api.get_json(&summary_path(portfolio_id, window)).await?;
    unwrap_envelope(body, "trades")
}

pub async fn fetch_trade(api: &ApiClient, portfolio_id: i64, trade_id: i64) -> Result<Trade> {
    let body = api.get_json(&item_path(portfolio_id, trade_id)).await?;
    unwrap_envelope(body, "trade")
}

pub async fn save_trade(
    api: &ApiClient,
    portfolio_id: i64,
    trade_id: i64,
    save: &TradeSave,
) -> Result<Trade> {
    let body = api
        .post_json(&item_path(portfolio_id, trade_id), save)
        .await?;
    unwrap_envelope(body, "trade")
}

pub async fn delete_trade(api: &ApiClient, portfolio_id: i64, trade_id: i64) -> Result<()> {
    api.delete(&item_path(portfolio_id, trade_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_body_carries_numeric_strategy() {
        let save = TradeSave {
            strategy: TradeStrategy::TheWheel,
            status: TradeStatus::Open,
            closed_at: None,
            comment: None,
            risk: Some(9500.0),
        };
        let v = serde_json::to_value(&save).unwrap();
        assert_eq!(v["strategy"], json!(3));
        assert_eq!(v["status"], json!("open"));
        assert_eq!(v["risk"], json!(9500.0));
    }

    #[test]
    fn test_item_path() {
        assert_eq!(item_path(2, 17), "/api/portfolio/2/trades/id/17");
    }
}
