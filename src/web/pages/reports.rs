//! Performance and tax report pages

use crate::client;
use crate::error::PageError;
use crate::models::PeriodWindow;
use crate::state::AppState;
use crate::web::views::{self, escape, links, window_nav};
use axum::extract::{Path, State};
use axum::response::Html;
use chrono::{Datelike, Utc};
use std::sync::Arc;

async fn render_summary(
    state: &AppState,
    portfolio_id: i64,
    window: PeriodWindow,
) -> Result<Html<String>, PageError> {
    let rows = client::reports::fetch_reports(&state.api, portfolio_id, window).await?;
    let nav = window_nav(window, |w| links::reports_window(portfolio_id, w));
    let year = Utc::now().year();
    let body = format!(
        "{}\n{}\n<p><a href=\"{}\">Tax report {}</a></p>",
        nav,
        views::reports::report_table(&rows).render(),
        escape(&links::year_report(portfolio_id, year)),
        year
    );
    Ok(Html(views::page("Reports", &body)))
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

pub async fn year(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, year)): Path<(i64, i32)>,
) -> Result<Html<String>, PageError> {
    let report = client::reports::fetch_year_report(&state.api, portfolio_id, year).await?;
    let body = views::reports::tax_report_table(&report).render();
    Ok(Html(views::page(&format!("Tax report {}", year), &body)))
}
