//! Statement loaders and trade-link actions

use crate::client::{unwrap_envelope, ApiClient};
use crate::error::Result;
use crate::models::{PeriodWindow, Statement, StatementsSummary, Trade};

pub fn summary_path(portfolio_id: i64, window: PeriodWindow) -> String {
    format!(
        "/api/portfolio/{}/statements/summary/{}",
        portfolio_id,
        window.as_str()
    )
}

pub fn month_path(portfolio_id: i64, year: i32, month: u32) -> String {
    format!(
        "/api/portfolio/{}/statements/month/{}/{}",
        portfolio_id, year, month
    )
}

pub fn item_path(portfolio_id: i64, statement_id: i64) -> String {
    format!(
        "/api/portfolio/{}/statements/id/{}",
        portfolio_id, statement_id
    )
}

fn command_path(portfolio_id: i64, statement_id: i64, verb: &str) -> String {
    format!(
        "/api/portfolio/{}/statements/{}/{}",
        portfolio_id, statement_id, verb
    )
}

pub fn add_to_trade_path(portfolio_id: i64, statement_id: i64, trade_id: i64) -> String {
    command_path(
        portfolio_id,
        statement_id,
        &format!("add-to-trade/{}", trade_id),
    )
}

pub async fn fetch_summary(
    api: &ApiClient,
    portfolio_id: i64,
    window: PeriodWindow,
) -> Result<StatementsSummary> {
    let body = api.get_json(&summary_path(portfolio_id, window)).await?;
    unwrap_envelope(body, "summary")
}

/// Statements of one month, returned in the order the API lists them
pub async fn fetch_month(
    api: &ApiClient,
    portfolio_id: i64,
    year: i32,
    month: u32,
) -> Result<Vec<Statement>> {
    let body = api.get_json(&month_path(portfolio_id, year, month)).await?;
    unwrap_envelope(body, "statemententries")
}

pub async fn fetch_statement(
    api: &ApiClient,
    portfolio_id: i64,
    statement_id: i64,
) -> Result<Statement> {
    let body = api.get_json(&item_path(portfolio_id, statement_id)).await?;
    unwrap_envelope(body, "statement")
}

/// Create a new trade from this statement and link it
pub async fn create_trade(
    api: &ApiClient,
    portfolio_id: i64,
    statement_id: i64,
) -> Result<Trade> {
    let body = api
        .post_empty(&command_path(portfolio_id, statement_id, "create-trade"))
        .await?;
    unwrap_envelope(body, "trade")
}

/// Link this statement to a matching open trade
pub async fn guess_trade(api: &ApiClient, portfolio_id: i64, statement_id: i64) -> Result<Trade> {
    let body = api
        .post_empty(&command_path(portfolio_id, statement_id, "guess-trade"))
        .await?;
    unwrap_envelope(body, "trade")
}

pub async fn unlink_trade(
    api: &ApiClient,
    portfolio_id: i64,
    statement_id: i64,
) -> Result<Statement> {
    let body = api
        .post_empty(&command_path(portfolio_id, statement_id, "unlink-trade"))
        .await?;
    unwrap_envelope(body, "statement")
}

pub async fn add_to_trade(
    api: &ApiClient,
    portfolio_id: i64,
    statement_id: i64,
    trade_id: i64,
) -> Result<Statement> {
    let body = api
        .post_empty(&add_to_trade_path(portfolio_id, statement_id, trade_id))
        .await?;
    unwrap_envelope(body, "statement")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_path_is_exact() {
        assert_eq!(
            month_path(12, 2026, 2),
            "/api/portfolio/12/statements/month/2026/2"
        );
    }

    #[test]
    fn test_summary_paths_fixed_variants() {
        assert_eq!(
            summary_path(1, PeriodWindow::YearToDate),
            "/api/portfolio/1/statements/summary/ytd"
        );
        assert_eq!(
            summary_path(1, PeriodWindow::TrailingYear),
            "/api/portfolio/1/statements/summary/12m"
        );
        assert_eq!(
            summary_path(1, PeriodWindow::AllTime),
            "/api/portfolio/1/statements/summary/all"
        );
    }

    #[test]
    fn test_command_paths() {
        assert_eq!(
            command_path(1, 5, "create-trade"),
            "/api/portfolio/1/statements/5/create-trade"
        );
        assert_eq!(
            add_to_trade_path(1, 5, 9),
            "/api/portfolio/1/statements/5/add-to-trade/9"
        );
    }
}
