//! Page route table
//!
//! Nesting mirrors resource containment under `/portfolio/:portfolio_id/`.
//! The trailing-slash routes exist because delete and save actions redirect
//! to the literal relative path `../`, which browsers resolve to the parent
//! collection with a trailing slash.

use crate::state::AppState;
use crate::web::pages;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(pages::portfolios::index))
        .route("/portfolio/:portfolio_id", get(pages::portfolios::dashboard))
        // Statements
        .route(
            "/portfolio/:portfolio_id/statements",
            get(pages::statements::summary_default),
        )
        .route(
            "/portfolio/:portfolio_id/statements/:window",
            get(pages::statements::summary),
        )
        .route(
            "/portfolio/:portfolio_id/statements/month/:year/:month",
            get(pages::statements::month),
        )
        .route(
            "/portfolio/:portfolio_id/statements/id/:statement_id",
            get(pages::statements::item),
        )
        .route(
            "/portfolio/:portfolio_id/statements/id/:statement_id/create-trade",
            post(pages::statements::create_trade),
        )
        .route(
            "/portfolio/:portfolio_id/statements/id/:statement_id/guess-trade",
            post(pages::statements::guess_trade),
        )
        .route(
            "/portfolio/:portfolio_id/statements/id/:statement_id/unlink-trade",
            post(pages::statements::unlink_trade),
        )
        .route(
            "/portfolio/:portfolio_id/statements/id/:statement_id/add-to-trade",
            post(pages::statements::add_to_trade),
        )
        // Trades
        .route(
            "/portfolio/:portfolio_id/trades",
            get(pages::trades::summary_default),
        )
        .route(
            "/portfolio/:portfolio_id/trades/:window",
            get(pages::trades::summary),
        )
        .route(
            "/portfolio/:portfolio_id/trades/id/",
            get(pages::trades::summary_default),
        )
        .route(
            "/portfolio/:portfolio_id/trades/id/:trade_id",
            get(pages::trades::item),
        )
        .route(
            "/portfolio/:portfolio_id/trades/id/:trade_id/save",
            post(pages::trades::save),
        )
        .route(
            "/portfolio/:portfolio_id/trades/id/:trade_id/delete",
            post(pages::trades::delete),
        )
        // Positions
        .route(
            "/portfolio/:portfolio_id/positions",
            get(pages::positions::index),
        )
        .route(
            "/portfolio/:portfolio_id/positions/options",
            get(pages::positions::options),
        )
        // Balances
        .route(
            "/portfolio/:portfolio_id/balances",
            get(pages::balances::index),
        )
        .route(
            "/portfolio/:portfolio_id/balances/",
            get(pages::balances::index),
        )
        .route(
            "/portfolio/:portfolio_id/balances/:balance_id",
            get(pages::balances::item),
        )
        .route(
            "/portfolio/:portfolio_id/balances/:balance_id/save",
            post(pages::balances::save),
        )
        .route(
            "/portfolio/:portfolio_id/balances/:balance_id/delete",
            post(pages::balances::delete),
        )
        // Settings
        .route(
            "/portfolio/:portfolio_id/settings",
            get(pages::settings::index),
        )
        .route(
            "/portfolio/:portfolio_id/settings/",
            get(pages::settings::index),
        )
        .route(
            "/portfolio/:portfolio_id/settings/create",
            post(pages::settings::create),
        )
        .route(
            "/portfolio/:portfolio_id/settings/:setting_id",
            get(pages::settings::item),
        )
        .route(
            "/portfolio/:portfolio_id/settings/:setting_id/save",
            post(pages::settings::save),
        )
        .route(
            "/portfolio/:portfolio_id/settings/:setting_id/delete",
            post(pages::settings::delete),
        )
        // Orders
        .route("/portfolio/:portfolio_id/orders", get(pages::orders::index))
        .route(
            "/portfolio/:portfolio_id/orders/",
            get(pages::orders::index),
        )
        .route(
            "/portfolio/:portfolio_id/orders/:order_id/delete",
            post(pages::orders::delete),
        )
        // Reports
        .route(
            "/portfolio/:portfolio_id/reports",
            get(pages::reports::summary_default),
        )
        .route(
            "/portfolio/:portfolio_id/reports/:window",
            get(pages::reports::summary),
        )
        .route(
            "/portfolio/:portfolio_id/reports/year/:year",
            get(pages::reports::year),
        )
}
