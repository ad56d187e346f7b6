//! Reference-data loaders and the quote push action

use crate::client::{unwrap_envelope, ApiClient};
use crate::error::Result;
use crate::models::Contract;
use serde::{Deserialize, Serialize};

pub fn stocks_path() -> String {
    "/api/repository/stocks/".to_string()
}

pub fn options_path(underlying_id: i64) -> String {
    format!("/api/repository/options/{}", underlying_id)
}

pub fn quotes_path() -> String {
    "/api/repository/quotes".to_string()
}

/// One live quote update for a contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteUpdate {
    pub contract_id: i64,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: Option<f64>,
}

pub async fn fetch_stocks(api: &ApiClient) -> Result<Vec<Contract>> {
    let body = api.get_json(&stocks_path()).await?;
    unwrap_envelope(body, "stocks")
}

/// Option chain known for one underlying
pub async fn fetch_options(api: &ApiClient, underlying_id: i64) -> Result<Vec<Contract>> {
    let body = api.get_json(&options_path(underlying_id)).await?;
    unwrap_envelope(body, "options")
}

pub async fn push_quotes(api: &ApiClient, quotes: &[QuoteUpdate]) -> Result<()> {
    api.post_json(&quotes_path(), &quotes).await?;
    Ok(())
}
