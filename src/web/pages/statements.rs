//! Statement pages and trade-link actions

use crate::client::{self, parse_number};
use crate::error::PageError;
use crate::models::PeriodWindow;
use crate::state::AppState;
use crate::web::views::{self, format, links};
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

async fn render_summary(
    state: &AppState,
    portfolio_id: i64,
    window: PeriodWindow,
) -> Result<Html<String>, PageError> {
    let summary = client::statements::fetch_summary(&state.api, portfolio_id, window).await?;
    let body = views::statements::summary_page(portfolio_id, window, &summary);
    Ok(Html(views::page("Statements", &body)))
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

pub async fn month(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, year, month)): Path<(i64, i32, u32)>,
) -> Result<Html<String>, PageError> {
    let entries = client::statements::fetch_month(&state.api, portfolio_id, year, month).await?;
    let body = views::statements::month_table(portfolio_id, &entries).render();
    let title = format!("Statements {} {}", format::month_name(month), year);
    Ok(Html(views::page(&title, &body)))
}

pub async fn item(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, statement_id)): Path<(i64, i64)>,
) -> Result<Html<String>, PageError> {
    let statement =
        client::statements::fetch_statement(&state.api, portfolio_id, statement_id).await?;
    let body = views::statements::statement_page(portfolio_id, &statement);
    Ok(Html(views::page(
        &format!("Statement {}", statement.date),
        &body,
    )))
}

fn back_to_statement(portfolio_id: i64, statement_id: i64) -> Redirect {
    Redirect::to(&links::statement(portfolio_id, statement_id))
}

pub async fn create_trade(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, statement_id)): Path<(i64, i64)>,
) -> Result<Redirect, PageError> {
    client::statements::create_trade(&state.api, portfolio_id, statement_id).await?;
    Ok(back_to_statement(portfolio_id, statement_id))
}

pub async fn guess_trade(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, statement_id)): Path<(i64, i64)>,
) -> Result<Redirect, PageError> {
    client::statements::guess_trade(&state.api, portfolio_id, statement_id).await?;
    Ok(back_to_statement(portfolio_id, statement_id))
}

pub async fn unlink_trade(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, statement_id)): Path<(i64, i64)>,
) -> Result<Redirect, PageError> {
    client::statements::unlink_trade(&state.api, portfolio_id, statement_id).await?;
    Ok(back_to_statement(portfolio_id, statement_id))
}

#[derive(Debug, Deserialize)]
pub struct AddToTradeForm {
    pub trade_id: String,
}

pub async fn add_to_trade(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, statement_id)): Path<(i64, i64)>,
    Form(form): Form<AddToTradeForm>,
) -> Result<Redirect, PageError> {
    let trade_id: i64 = parse_number("trade_id", &form.trade_id)?;
    client::statements::add_to_trade(&state.api, portfolio_id, statement_id, trade_id).await?;
    Ok(back_to_statement(portfolio_id, statement_id))
}
