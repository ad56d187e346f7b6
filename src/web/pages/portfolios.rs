//! Portfolio list and dashboard pages

use crate::client;
use crate::error::PageError;
use crate::state::AppState;
use crate::web::views;
use axum::extract::{Path, State};
use axum::response::Html;
use std::sync::Arc;

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let portfolios = client::portfolios::fetch_portfolios(&state.api).await?;
    let body = views::portfolios::portfolio_list(&portfolios).render();
    Ok(Html(views::page("Portfolios", &body)))
}

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let portfolio = client::portfolios::fetch_portfolio(&state.api, portfolio_id).await?;
    let body = views::portfolios::dashboard(&portfolio);
    Ok(Html(views::page(&portfolio.name, &body)))
}
