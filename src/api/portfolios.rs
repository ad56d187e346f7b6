//! Portfolio endpoints

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let portfolios = state.db.list_portfolios()?;
    Ok(Json(json!({ "portfolios": portfolios })))
}

pub async fn item(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let portfolio = state.db.get_portfolio(portfolio_id)?;
    Ok(Json(json!({ "portfolio": portfolio })))
}
