//! Setting loaders and create/save/delete actions

use crate::client::{unwrap_envelope, ApiClient};
use crate::error::Result;
use crate::models::Setting;
use serde::{Deserialize, Serialize};

pub fn list_path(portfolio_id: i64) -> String {
    format!("/api/portfolio/{}/settings/", portfolio_id)
}

pub fn item_path(portfolio_id: i64, setting_id: i64) -> String {
    format!("/api/portfolio/{}/settings/{}", portfolio_id, setting_id)
}

/// Setting fields as sent to the API; numbers are numbers on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingSave {
    pub symbol: String,
    pub nav_ratio: f64,
    pub csp_strategy: i32,
    pub cc_strategy: i32,
    pub csp_delta: f64,
    pub cc_delta: f64,
    pub roll_put_days: i32,
    pub roll_call_days: i32,
}

pub async fn fetch_settings(api: &ApiClient, portfolio_id: i64) -> Result<Vec<Setting>> {
    let body = api.get_json(&list_path(portfolio_id)).await?;
    unwrap_envelope(body, "settings")
}

pub async fn fetch_setting(
    api: &ApiClient,
    portfolio_id: i64,
    setting_id: i64,
) -> Result<Setting> {
    let body = api.get_json(&item_path(portfolio_id, setting_id)).await?;
    unwrap_envelope(body, "setting")
}

/// Create a new per-underlying setting (PUT on the collection)
pub async fn create_setting(
    api: &ApiClient,
    portfolio_id: i64,
    save: &SettingSave,
) -> Result<Setting> {
    let body = api.put_json(&list_path(portfolio_id), save).await?;
    unwrap_envelope(body, "setting")
}

pub async fn save_setting(
    api: &ApiClient,
    portfolio_id: i64,
    setting_id: i64,
    save: &SettingSave,
) -> Result<Setting> {
    let body = api
        .post_json(&item_path(portfolio_id, setting_id), save)
        .await?;
    unwrap_envelope(body, "setting")
}

pub async fn delete_setting(api: &ApiClient, portfolio_id: i64, setting_id: i64) -> Result<()> {
    api.delete(&item_path(portfolio_id, setting_id)).await
}
