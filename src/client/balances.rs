//! Balance loaders and save/delete actions

use crate::client::{unwrap_envelope, ApiClient};
use crate::error::Result;
use crate::models::Balance;
use serde::{Deserialize, Serialize};

pub fn index_path(portfolio_id: i64) -> String {
    format!("/api/portfolio/{}/balances/index", portfolio_id)
}

pub fn item_path(portfolio_id: i64, balance_id: i64) -> String {
    format!("/api/portfolio/{}/balances/id/{}", portfolio_id, balance_id)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSave {
    pub currency: String,
    pub quantity: f64,
}

pub async fn fetch_balances(api: &ApiClient, portfolio_id: i64) -> Result<Vec<Balance>> {
    let body = api.get_json(&index_path(portfolio_id)).await?;
    unwrap_envelope(body, "balances")
}

pub async fn fetch_balance(
    api: &ApiClient,
    portfolio_id: i64,
    balance_id: i64,
) -> Result<Balance> {
    let body = api.get_json(&item_path(portfolio_id, balance_id)).await?;
    unwrap_envelope(body, "balance")
}

pub async fn save_balance(
    api: &ApiClient,
    portfolio_id: i64,
    balance_id: i64,
    save: &BalanceSave,
) -> Result<Balance> {
    let body = api
        .post_json(&item_path(portfolio_id, balance_id), save)
        .await?;
    unwrap_envelope(body, "balance")
}

pub async fn delete_balance(api: &ApiClient, portfolio_id: i64, balance_id: i64) -> Result<()> {
    api.delete(&item_path(portfolio_id, balance_id)).await
}
