//! Cash balance endpoints

use crate::client::balances::BalanceSave;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn index(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let balances = state.db.list_balances(portfolio_id)?;
    Ok(Json(json!({ "balances": balances })))
}

pub async fn item(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, balance_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    let balance = state.db.get_balance(portfolio_id, balance_id)?;
    Ok(Json(json!({ "balance": balance })))
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, balance_id)): Path<(i64, i64)>,
    Json(save): Json<BalanceSave>,
) -> Result<Json<Value>, ApiError> {
    let balance = state
        .db
        .update_balance(portfolio_id, balance_id, &save.currency, save.quantity)?;
    Ok(Json(json!({ "balance": balance })))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, balance_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    state.db.delete_balance(portfolio_id, balance_id)?;
    Ok(Json(json!({ "deleted": balance_id })))
}
