//! Position loaders

use crate::client::{unwrap_envelope, ApiClient};
use crate::error::Result;
use crate::models::Position;

pub fn index_path(portfolio_id: i64) -> String {
    format!("/api/portfolio/{}/positions/index", portfolio_id)
}

pub fn options_path(portfolio_id: i64) -> String {
    format!("/api/portfolio/{}/positions/options", portfolio_id)
}

pub async fn fetch_positions(api: &ApiClient, portfolio_id: i64) -> Result<Vec<Position>> {
    let body = api.get_json(&index_path(portfolio_id)).await?;
    unwrap_envelope(body, "positions")
}

pub async fn fetch_option_positions(api: &ApiClient, portfolio_id: i64) -> Result<Vec<Position>> {
    let body = api.get_json(&options_path(portfolio_id)).await?;
    unwrap_envelope(body, "positions")
}
