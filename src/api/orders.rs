//! Open order endpoints

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
    let orders = state.db.list_orders(portfolio_id)?;
    Ok(Json(json!({ "orders": orders })))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, order_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    state.db.delete_order(portfolio_id, order_id)?;
    Ok(Json(json!({ "deleted": order_id })))
}
