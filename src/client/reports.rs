//! Report loaders

use crate::client::{unwrap_envelope, ApiClient};
use crate::error::Result;
use crate::models::{PeriodWindow, ReportRow, YearReport};

pub fn summary_path(portfolio_id: i64, window: PeriodWindow) -> String {
    format!(
        "/api/portfolio/{}/reports/summary/{}",
        portfolio_id,
        window.as_str()
    )
}

pub fn year_path(portfolio_id: i64, year: i32) -> String {
    format!("/api/portfolio/{}/reports/year/{}", portfolio_id, year)
}

pub async fn fetch_reports(
    api: &ApiClient,
    portfolio_id: i64,
    window: PeriodWindow,
) -> Result<Vec<ReportRow>> {
    let body = api.get_json(&summary_path(portfolio_id, window)).await?;
    unwrap_envelope(body, "reports")
}

pub async fn fetch_year_report(
    api: &ApiClient,
    portfolio_id: i64,
    year: i32,
) -> Result<YearReport> {
    let body = api.get_json(&year_path(portfolio_id, year)).await?;
    unwrap_envelope(body, "report")
}
