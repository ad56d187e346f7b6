//! Open order page and delete action

use crate::client;
use crate::error::PageError;
use crate::state::AppState;
use crate::web::views;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use std::sync::Arc;

pub async fn index(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let orders = client::orders::fetch_orders(&state.api, portfolio_id).await?;
    let body = views::orders::orders_table(portfolio_id, &orders).render();
    Ok(Html(views::page("Open orders", &body)))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, order_id)): Path<(i64, i64)>,
) -> Result<Redirect, PageError> {
    client::orders::delete_order(&state.api, portfolio_id, order_id).await?;
    Ok(Redirect::to("../"))
}
