//! Performance and tax report endpoints

use crate::error::ApiError;
use crate::models::YearReport;
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
    let reports = state.db.report_rows(portfolio_id, window, today)?;
    Ok(Json(json!({ "reports": reports })))
}

pub async fn year(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, year)): Path<(i64, i32)>,
) -> Result<Json<Value>, ApiError> {
    let entries = state.db.tax_entries(portfolio_id, year)?;
    let report = YearReport { year, entries };
    Ok(Json(json!({ "report": report })))
}
