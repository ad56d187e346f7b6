//! Balance pages and actions

use crate::client::{self, balances::BalanceSave, parse_number};
use crate::error::PageError;
use crate::state::AppState;
use crate::web::views;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

pub async fn index(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let balances = client::balances::fetch_balances(&state.api, portfolio_id).await?;
    let body = views::balances::balances_table(portfolio_id, &balances).render();
    Ok(Html(views::page("Balances", &body)))
}

pub async fn item(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, balance_id)): Path<(i64, i64)>,
) -> Result<Html<String>, PageError> {
    let balance = client::balances::fetch_balance(&state.api, portfolio_id, balance_id).await?;
    let body = views::balances::balance_page(portfolio_id, &balance);
    Ok(Html(views::page(
        &format!("Balance {}", balance.currency),
        &body,
    )))
}

#[derive(Debug, Deserialize)]
pub struct BalanceForm {
    pub currency: String,
    pub quantity: String,
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, balance_id)): Path<(i64, i64)>,
    Form(form): Form<BalanceForm>,
) -> Result<Redirect, PageError> {
    let save = BalanceSave {
        currency: form.currency.trim().to_string(),
        quantity: parse_number("quantity", &form.quantity)?,
    };
    client::balances::save_balance(&state.api, portfolio_id, balance_id, &save).await?;
    Ok(Redirect::to("../"))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, balance_id)): Path<(i64, i64)>,
) -> Result<Redirect, PageError> {
    client::balances::delete_balance(&state.api, portfolio_id, balance_id).await?;
    Ok(Redirect::to("../"))
}
