//! Per-underlying setting endpoints

use crate::client::settings::SettingSave;
use crate::db::SettingValues;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

fn values(save: SettingSave) -> SettingValues {
    SettingValues {
        symbol: save.symbol,
        nav_ratio: save.nav_ratio,
        csp_strategy: save.csp_strategy,
        cc_strategy: save.cc_strategy,
        csp_delta: save.csp_delta,
        cc_delta: save.cc_delta,
        roll_put_days: save.roll_put_days,
        roll_call_days: save.roll_call_days,
    }
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let settings = state.db.list_settings(portfolio_id)?;
    Ok(Json(json!({ "settings": settings })))
}

pub async fn item(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, setting_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    let setting = state.db.get_setting(portfolio_id, setting_id)?;
    Ok(Json(json!({ "setting": setting })))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
    Json(save): Json<SettingSave>,
) -> Result<Json<Value>, ApiError> {
    let setting = state.db.insert_setting(portfolio_id, &values(save))?;
    Ok(Json(json!({ "setting": setting })))
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, setting_id)): Path<(i64, i64)>,
    Json(save): Json<SettingSave>,
) -> Result<Json<Value>, ApiError> {
    let setting = state
        .db
        .update_setting(portfolio_id, setting_id, &values(save))?;
    Ok(Json(json!({ "setting": setting })))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, setting_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    state.db.delete_setting(portfolio_id, setting_id)?;
    Ok(Json(json!({ "deleted": setting_id })))
}
