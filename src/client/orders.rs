//! Open order loaders and delete action

use crate::client::{unwrap_envelope, ApiClient};
use crate::error::Result;
use crate::models::OpenOrder;

pub fn index_path(portfolio_id: i64) -> String {
    format!("/api/portfolio/{}/orders/index", portfolio_id)
}

pub fn item_path(portfolio_id: i64, order_id: i64) -> String {
    format!("/api/portfolio/{}/orders/{}", portfolio_id, order_id)
}

pub async fn fetch_orders(api: &ApiClient, portfolio_id: i64) -> Result<Vec<OpenOrder>> {
    let body = api.get_json(&index_path(portfolio_id)).await?;
    unwrap_envelope(body, "orders")
}

pub async fn delete_order(api: &ApiClient, portfolio_id: i64, order_id: i64) -> Result<()> {
    api.delete(&item_path(portfolio_id, order_id)).await
}
