//! Portfolio loaders

use crate::client::{unwrap_envelope, ApiClient};
use crate::error::Result;
use crate::models::Portfolio;

pub fn list_path() -> String {
    "/api/portfolio".to_string()
}

pub fn item_path(portfolio_id: i64) -> String {
    format!("/api/portfolio/{}", portfolio_id)
}

pub async fn fetch_portfolios(api: &ApiClient) -> Result<Vec<Portfolio>> {
    let body = api.get_json(&list_path()).await?;
    unwrap_envelope(body, "portfolios")
}

pub async fn fetch_portfolio(api: &ApiClient, portfolio_id: i64) -> Result<Portfolio> {
    let body = api.get_json(&item_path(portfolio_id)).await?;
    unwrap_envelope(body, "portfolio")
}
