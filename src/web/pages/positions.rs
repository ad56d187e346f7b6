//! Position pages

use crate::client;
use crate::error::PageError;
use crate::state::AppState;
use crate::web::views;
use axum::extract::{Path, State};
use axum::response::Html;
use chrono::Utc;
use std::sync::Arc;

pub async fn index(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let positions = client::positions::fetch_positions(&state.api, portfolio_id).await?;
    let body = views::positions::positions_table(&positions).render();
    Ok(Html(views::page("Positions", &body)))
}

pub async fn options(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let positions = client::positions::fetch_option_positions(&state.api, portfolio_id).await?;
    let today = Utc::now().date_naive();
    let body = views::positions::option_positions_table(&positions, today).render();
    Ok(Html(views::page("Option positions", &body)))
}
