//! Trade pages: summary, detail with edit form, save and delete actions

use crate::client::{self, parse_optional_number, parse_number, trades::TradeSave};
use crate::error::{AppError, PageError};
use crate::models::{PeriodWindow, TradeStatus, TradeStrategy};
use crate::state::AppState;
use crate::web::views;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

async fn render_summary(
    state: &AppState,
    portfolio_id: i64,
    window: PeriodWindow,
) -> Result<Html<String>, PageError> {
    let trades = client::trades::fetch_trades(&state.api, portfolio_id, window).await?;
    let body = views::trades::summary_page(portfolio_id, window, &trades);
    Ok(Html(views::page("Trades", &body)))
}

pub async fn summary_default(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    render_summary(&state, portfolio_id, PeriodWindow::YearToDate).await
}

pub async fn summary(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, window)): Path<(i64, String)>,
) -> Result<Html<String>, PageError> {
    let window = super::parse_window(&window)?;
    render_summary(&state, portfolio_id, window).await
}

pub async fn item(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, trade_id)): Path<(i64, i64)>,
) -> Result<Html<String>, PageError> {
    let trade = client::trades::fetch_trade(&state.api, portfolio_id, trade_id).await?;
    let body = views::trades::trade_page(portfolio_id, &trade);
    Ok(Html(views::page(&format!("Trade {}", trade.symbol), &body)))
}

/// Raw edit form; every field arrives as a string and is coerced here
#[derive(Debug, Deserialize)]
pub struct TradeForm {
    pub strategy: String,
    pub status: String,
    pub closed_at: String,
    pub comment: String,
    pub risk: String,
}

impl TradeForm {
    fn into_save(self) -> Result<TradeSave, AppError> {
        let code: i32 = parse_number("strategy", &self.strategy)?;
        let strategy = TradeStrategy::try_from(code).map_err(AppError::Validation)?;
        let status = TradeStatus::parse(self.status.trim())
            .ok_or_else(|| AppError::Validation(format!("invalid status: '{}'", self.status)))?;
        let closed_at = if self.closed_at.trim().is_empty() {
            None
        } else {
            Some(self.closed_at.trim().parse::<NaiveDate>().map_err(|_| {
                AppError::Validation(format!("invalid closed date: '{}'", self.closed_at))
            })?)
        };
        let comment = match self.comment.trim() {
            "" => None,
            c => Some(c.to_string()),
        };
        let risk = parse_optional_number("risk", &self.risk)?;
        Ok(TradeSave {
            strategy,
            status,
            closed_at,
            comment,
            risk,
        })
    }
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, trade_id)): Path<(i64, i64)>,
    Form(form): Form<TradeForm>,
) -> Result<Redirect, PageError> {
    let save = form.into_save()?;
    client::trades::save_trade(&state.api, portfolio_id, trade_id, &save).await?;
    Ok(Redirect::to("../"))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, trade_id)): Path<(i64, i64)>,
) -> Result<Redirect, PageError> {
    client::trades::delete_trade(&state.api, portfolio_id, trade_id).await?;
    Ok(Redirect::to("../"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(strategy: &str, status: &str, closed_at: &str, risk: &str) -> TradeForm {
        TradeForm {
            strategy: strategy.to_string(),
            status: status.to_string(),
            closed_at: closed_at.to_string(),
            comment: String::new(),
            risk: risk.to_string(),
        }
    }

    #[test]
    fn test_form_coerces_numeric_strings() {
        let save = form("3", "closed", "2026-08-20", "9500.5").into_save().unwrap();
        assert_eq!(save.strategy, TradeStrategy::TheWheel);
        assert_eq!(save.status, TradeStatus::Closed);
        assert_eq!(save.closed_at, Some("2026-08-20".parse().unwrap()));
        assert_eq!(save.risk, Some(9500.5));
        assert_eq!(save.comment, None);
    }

    #[test]
    fn test_form_rejects_bad_values() {
        assert!(form("wheel", "open", "", "").into_save().is_err());
        assert!(form("3", "maybe", "", "").into_save().is_err());
        assert!(form("3", "open", "soon", "").into_save().is_err());
        let save = form("3", "open", "", "").into_save().unwrap();
        assert_eq!(save.closed_at, None);
        assert_eq!(save.risk, None);
    }
}
