//! Page handlers: loaders fetch from the JSON API and render views, actions
//! post one mutation and redirect
//!
//! Handlers never touch the database directly; everything goes through
//! [`crate::client`], so the pages see exactly what any API consumer sees.

pub mod balances;
pub mod orders;
pub mod portfolios;
pub mod positions;
pub mod reports;
pub mod settings;
pub mod statements;
pub mod trades;

use crate::error::AppError;
use crate::models::PeriodWindow;

/// Parse a `{ytd,12m,all}` page path segment; anything else is a 404
pub(crate) fn parse_window(raw: &str) -> Result<PeriodWindow, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Unknown summary period: {}", raw)))
}
