//! Trade endpoints

use crate::client::trades::TradeSave;
use crate::db::TradeUpdate;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn summary(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, window)): Path<(i64, String)>,
) -> Result<Json<Value>, ApiError> {
    let window = super::parse_window(&window)?;
    let today = Utc::now().date_naive();
    let trades = state.db.trades_summary(portfolio_id, window, today)?;
    Ok(Json(json!({ "trades": trades })))
}

pub async fn item(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, trade_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    let trade = state.db.get_trade(portfolio_id, trade_id)?;
    Ok(Json(json!({ "trade": trade })))
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, trade_id)): Path<(i64, i64)>,
    Json(save): Json<TradeSave>,
) -> Result<Json<Value>, ApiError> {
    let update = TradeUpdate {
        strategy: save.strategy,
        status: save.status,
        closed_at: save.closed_at,
        comment: save.comment,
        risk: save.risk,
    };
    let trade = state.db.update_trade(portfolio_id, trade_id, &update)?;
    Ok(Json(json!({ "trade": trade })))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, trade_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    state.db.delete_trade(portfolio_id, trade_id)?;
    Ok(Json(json!({ "deleted": trade_id })))
}
