//! Contract repository endpoints: reference data and quote ingestion

use crate::client::repository::QuoteUpdate;
use crate::error::ApiError;
use crate::state::{AppState, Quote};
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn stocks(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let stocks = state.db.list_stock_contracts()?;
    Ok(Json(json!({ "stocks": stocks })))
}

pub async fn options(
    State(state): State<Arc<AppState>>,
    Path(underlying_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let options = state.db.list_option_contracts(underlying_id)?;
    Ok(Json(json!({ "options": options })))
}

/// Accept a batch of quote updates, mirrored into the contracts' price
/// columns and the in-memory cache. All or nothing: an unknown contract id
/// rejects the whole batch.
pub async fn push_quotes(
    State(state): State<Arc<AppState>>,
    Json(updates): Json<Vec<QuoteUpdate>>,
) -> Result<Json<Value>, ApiError> {
    let quotes: Vec<(i64, Quote)> = updates
        .iter()
        .map(|u| {
            (
                u.contract_id,
                Quote {
                    bid: u.bid,
                    ask: u.ask,
                    last: u.last,
                },
            )
        })
        .collect();
    state.store_quotes(&quotes)?;
    tracing::debug!("Stored {} quote updates", updates.len());
    Ok(Json(json!({ "quotes": updates.len() })))
}
