//! JSON API surface
//!
//! Every endpoint returns its payload under a resource envelope key
//! (`{"portfolios": [...]}`), errors as `{"error": {code, message}}`.
//! Handlers are thin: parse the path, call the data layer, wrap the result.

pub mod balances;
pub mod orders;
pub mod portfolios;
pub mod positions;
pub mod repository;
pub mod reports;
pub mod settings;
pub mod statements;
pub mod trades;

use crate::state::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/portfolio", get(portfolios::list))
        .route("/api/portfolio/:portfolio_id", get(portfolios::item))
        .route(
            "/api/portfolio/:portfolio_id/statements/summary/:window",
            get(statements::summary),
        )
        .route(
            "/api/portfolio/:portfolio_id/statements/month/:year/:month",
            get(statements::month),
        )
        .route(
            "/api/portfolio/:portfolio_id/statements/id/:statement_id",
            get(statements::item),
        )
        .route(
            "/api/portfolio/:portfolio_id/statements/:statement_id/create-trade",
            post(statements::create_trade),
        )
        .route(
            "/api/portfolio/:portfolio_id/statements/:statement_id/guess-trade",
            post(statements::guess_trade),
        )
        .route(
            "/api/portfolio/:portfolio_id/statements/:statement_id/unlink-trade",
            post(statements::unlink_trade),
        )
        .route(
            "/api/portfolio/:portfolio_id/statements/:statement_id/add-to-trade/:trade_id",
            post(statements::add_to_trade),
        )
        .route(
            "/api/portfolio/:portfolio_id/trades/summary/:window",
            get(trades::summary),
        )
        .route(
            "/api/portfolio/:portfolio_id/trades/id/:trade_id",
            get(trades::item).post(trades::save).delete(trades::remove),
        )
        .route(
            "/api/portfolio/:portfolio_id/positions/index",
            get(positions::index),
        )
        .route(
            "/api/portfolio/:portfolio_id/positions/options",
            get(positions::options),
        )
        .route(
            "/api/portfolio/:portfolio_id/balances/index",
            get(balances::index),
        )
        .route(
            "/api/portfolio/:portfolio_id/balances/id/:balance_id",
            get(balances::item)
                .post(balances::save)
                .delete(balances::remove),
        )
        .route(
            "/api/portfolio/:portfolio_id/settings/",
            get(settings::list).put(settings::create),
        )
        .route(
            "/api/portfolio/:portfolio_id/settings/:setting_id",
            get(settings::item)
                .post(settings::save)
                .delete(settings::remove),
        )
        .route(
            "/api/portfolio/:portfolio_id/orders/index",
            get(orders::index),
        )
        .route(
            "/api/portfolio/:portfolio_id/orders/:order_id",
            delete(orders::remove),
        )
        .route(
            "/api/portfolio/:portfolio_id/reports/summary/:window",
            get(reports::summary),
        )
        .route(
            "/api/portfolio/:portfolio_id/reports/year/:year",
            get(reports::year),
        )
        .route("/api/repository/stocks/", get(repository::stocks))
        .route(
            "/api/repository/options/:underlying_id",
            get(repository::options),
        )
        .route("/api/repository/quotes", post(repository::push_quotes))
        .layer(CorsLayer::permissive())
}

/// Parse a `{ytd,12m,all}` path segment; unknown windows are a 404, not a 400,
/// because each window is its own endpoint.
pub(crate) fn parse_window(raw: &str) -> crate::error::Result<crate::models::PeriodWindow> {
    raw.parse()
        .map_err(|_| crate::error::AppError::NotFound(format!("Unknown summary period: {}", raw)))
}
