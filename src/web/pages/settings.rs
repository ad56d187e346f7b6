//! Setting pages and actions

use crate::client::{self, parse_number, settings::SettingSave};
use crate::error::{AppError, PageError};
use crate::state::AppState;
use crate::web::views::{self, links};
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

pub async fn index(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let settings = client::settings::fetch_settings(&state.api, portfolio_id).await?;
    let mut body = views::settings::settings_table(portfolio_id, &settings).render();
    body.push_str(&views::settings::create_form(portfolio_id));
    Ok(Html(views::page("Settings", &body)))
}

pub async fn item(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, setting_id)): Path<(i64, i64)>,
) -> Result<Html<String>, PageError> {
    let setting = client::settings::fetch_setting(&state.api, portfolio_id, setting_id).await?;
    let body = views::settings::setting_page(portfolio_id, &setting);
    Ok(Html(views::page(
        &format!("Setting {}", setting.symbol),
        &body,
    )))
}

#[derive(Debug, Deserialize)]
pub struct SettingForm {
    pub symbol: String,
    pub nav_ratio: String,
    pub csp_strategy: String,
    pub cc_strategy: String,
    pub csp_delta: String,
    pub cc_delta: String,
    pub roll_put_days: String,
    pub roll_call_days: String,
}

impl SettingForm {
    fn into_save(self) -> Result<SettingSave, AppError> {
        let symbol = self.symbol.trim().to_string();
        if symbol.is_empty() {
            return Err(AppError::Validation("symbol must not be empty".to_string()));
        }
        Ok(SettingSave {
            symbol,
            nav_ratio: parse_number("nav_ratio", &self.nav_ratio)?,
            csp_strategy: parse_number("csp_strategy", &self.csp_strategy)?,
            cc_strategy: parse_number("cc_strategy", &self.cc_strategy)?,
            csp_delta: parse_number("csp_delta", &self.csp_delta)?,
            cc_delta: parse_number("cc_delta", &self.cc_delta)?,
            roll_put_days: parse_number("roll_put_days", &self.roll_put_days)?,
            roll_call_days: parse_number("roll_call_days", &self.roll_call_days)?,
        })
    }
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(portfolio_id): Path<i64>,
    Form(form): Form<SettingForm>,
) -> Result<Redirect, PageError> {
    let save = form.into_save()?;
    client::settings::create_setting(&state.api, portfolio_id, &save).await?;
    Ok(Redirect::to(&links::settings(portfolio_id)))
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, setting_id)): Path<(i64, i64)>,
    Form(form): Form<SettingForm>,
) -> Result<Redirect, PageError> {
    let save = form.into_save()?;
    client::settings::save_setting(&state.api, portfolio_id, setting_id, &save).await?;
    Ok(Redirect::to("../"))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path((portfolio_id, setting_id)): Path<(i64, i64)>,
) -> Result<Redirect, PageError> {
    client::settings::delete_setting(&state.api, portfolio_id, setting_id).await?;
    Ok(Redirect::to("../"))
}
