//! Statement endpoints and trade-link commands

use crate::error::{ApiError, AppError};
use crate::models::{ContractDetails, OptionSide, Statement, StatementKind, TradeStrategy};
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
    let summary = state.db.statements_summary(portfolio_id, window, today)?;
    Ok(Json(json!({ "summary": summary })))
}

pub async fn month(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, year, month)): Path<(i64, i32, u32)>,
) -> Result<Json<Value>, ApiError> {
    let entries = state.db.statements_for_month(portfolio_id, year, month)?;
    Ok(Json(json!({ "statemententries": entries })))
}

pub async fn item(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, statement_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    let statement = state.db.get_statement(portfolio_id, statement_id)?;
    Ok(Json(json!({ "statement": statement })))
}

/// Pick an initial strategy from what the statement describes: an equity buy
/// opens a long stock trade, a sold put a cash secured put, a sold call a
/// covered call when stock of the underlying is held.
fn guess_strategy(state: &AppState, statement: &Statement, underlying: &str) -> TradeStrategy {
    match &statement.kind {
        StatementKind::Equity { quantity, .. } if *quantity > 0.0 => TradeStrategy::LongStock,
        StatementKind::OptionTrade { quantity, .. } if *quantity < 0.0 => {
            let side = statement
                .contract_id
                .and_then(|cid| state.db.get_contract(cid).ok())
                .and_then(|c| match c.details {
                    ContractDetails::Option { side, .. } => Some(side),
                    _ => None,
                });
            match side {
                Some(OptionSide::Put) => TradeStrategy::CashSecuredPut,
                Some(OptionSide::Call) if holds_stock(state, statement.portfolio_id, underlying) => {
                    TradeStrategy::CoveredCall
                }
                _ => TradeStrategy::Undefined,
            }
        }
        _ => TradeStrategy::Undefined,
    }
}

fn holds_stock(state: &AppState, portfolio_id: i64, symbol: &str) -> bool {
    state
        .db
        .list_positions(portfolio_id)
        .map(|positions| {
            positions.iter().any(|p| {
                p.quantity > 0.0
                    && p.contract.symbol == symbol
                    && matches!(p.contract.details, ContractDetails::Stock)
            })
        })
        .unwrap_or(false)
}

pub async fn create_trade(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, statement_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    let statement = state.db.get_statement(portfolio_id, statement_id)?;
    let symbol = state
        .db
        .statement_underlying(portfolio_id, statement_id)?
        .ok_or_else(|| {
            AppError::Validation(format!("Statement {} has no contract", statement_id))
        })?;
    let strategy = guess_strategy(&state, &statement, &symbol);
    let trade = state
        .db
        .create_trade_for_statement(portfolio_id, statement_id, &symbol, strategy)?;
    Ok(Json(json!({ "trade": trade })))
}

pub async fn guess_trade(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, statement_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    let symbol = state
        .db
        .statement_underlying(portfolio_id, statement_id)?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No open trade matches statement {}",
                statement_id
            ))
        })?;
    let trade_id = state
        .db
        .find_open_trade(portfolio_id, &symbol)?
        .ok_or_else(|| AppError::NotFound(format!("No open trade for {}", symbol)))?;
    state
        .db
        .link_statement_to_trade(portfolio_id, statement_id, Some(trade_id))?;
    let trade = state.db.get_trade(portfolio_id, trade_id)?;
    Ok(Json(json!({ "trade": trade })))
}

pub async fn unlink_trade(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, statement_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    let statement = state
        .db
        .link_statement_to_trade(portfolio_id, statement_id, None)?;
    Ok(Json(json!({ "statement": statement })))
}

pub async fn add_to_trade(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, statement_id, trade_id)): Path<(i64, i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    let statement =
        state
            .db
            .link_statement_to_trade(portfolio_id, statement_id, Some(trade_id))?;
    Ok(Json(json!({ "statement": statement })))
}
