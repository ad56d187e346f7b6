//! Position endpoints (read-only; positions come from the brokerage feed)

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
    let positions = state.db.list_positions(portfolio_id)?;
    Ok(Json(json!({ "positions": positions })))
}

pub async fn options(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let positions = state.db.list_option_positions(portfolio_id)?;
    Ok(Json(json!({ "positions": positions })))
}
