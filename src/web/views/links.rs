//! Pure link builders: id tuples to page paths

use crate::models::PeriodWindow;

pub fn portfolio(portfolio_id: i64) -> String {
    format!("/portfolio/{}", portfolio_id)
}

pub fn statements(portfolio_id: i64) -> String {
    format!("/portfolio/{}/statements", portfolio_id)
}

pub fn statements_window(portfolio_id: i64, window: PeriodWindow) -> String {
    format!("/portfolio/{}/statements/{}", portfolio_id, window.as_str())
}

pub fn statements_month(portfolio_id: i64, year: i32, month: u32) -> String {
    format!("/portfolio/{}/statements/month/{}/{}", portfolio_id, year, month)
}

pub fn statement(portfolio_id: i64, statement_id: i64) -> String {
    format!("/portfolio/{}/statements/id/{}", portfolio_id, statement_id)
}

pub fn trades(portfolio_id: i64) -> String {
    format!("/portfolio/{}/trades", portfolio_id)
}

pub fn trades_window(portfolio_id: i64, window: PeriodWindow) -> String {
    format!("/portfolio/{}/trades/{}", portfolio_id, window.as_str())
}

pub fn trade(portfolio_id: i64, trade_id: i64) -> String {
    format!("/portfolio/{}/trades/id/{}", portfolio_id, trade_id)
}

pub fn positions(portfolio_id: i64) -> String {
    format!("/portfolio/{}/positions", portfolio_id)
}

pub fn option_positions(portfolio_id: i64) -> String {
    format!("/portfolio/{}/positions/options", portfolio_id)
}

pub fn balances(portfolio_id: i64) -> String {
    format!("/portfolio/{}/balances", portfolio_id)
}

pub fn balance(portfolio_id: i64, balance_id: i64) -> String {
    format!("/portfolio/{}/balances/{}", portfolio_id, balance_id)
}

pub fn settings(portfolio_id: i64) -> String {
    format!("/portfolio/{}/settings", portfolio_id)
}

pub fn setting(portfolio_id: i64, setting_id: i64) -> String {
    format!("/portfolio/{}/settings/{}", portfolio_id, setting_id)
}

pub fn orders(portfolio_id: i64) -> String {
    format!("/portfolio/{}/orders", portfolio_id)
}

pub fn reports(portfolio_id: i64) -> String {
    format!("/portfolio/{}/reports", portfolio_id)
}

pub fn reports_window(portfolio_id: i64, window: PeriodWindow) -> String {
    format!("/portfolio/{}/reports/{}", portfolio_id, window.as_str())
}

pub fn year_report(portfolio_id: i64, year: i32) -> String {
    format!("/portfolio/{}/reports/year/{}", portfolio_id, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(statement(1, 5), "/portfolio/1/statements/id/5");
        assert_eq!(
            trades_window(2, PeriodWindow::TrailingYear),
            "/portfolio/2/trades/12m"
        );
        assert_eq!(statements_month(1, 2026, 2), "/portfolio/1/statements/month/2026/2");
    }
}
