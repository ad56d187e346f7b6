//! Reporting periods and summary row shapes

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three fixed summary windows. Each maps to its own endpoint path;
/// there is deliberately no free date-range parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodWindow {
    YearToDate,
    TrailingYear,
    AllTime,
}

impl PeriodWindow {
    /// Path segment used by both the API and the pages
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodWindow::YearToDate => "ytd",
            PeriodWindow::TrailingYear => "12m",
            PeriodWindow::AllTime => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodWindow::YearToDate => "year to date",
            PeriodWindow::TrailingYear => "last 12 months",
            PeriodWindow::AllTime => "all time",
        }
    }

    /// First date inside the window, or None for the unbounded window
    pub fn start(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            PeriodWindow::YearToDate => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            PeriodWindow::TrailingYear => today.checked_sub_months(Months::new(12)),
            PeriodWindow::AllTime => None,
        }
    }

    pub const ALL: [PeriodWindow; 3] = [
        PeriodWindow::YearToDate,
        PeriodWindow::TrailingYear,
        PeriodWindow::AllTime,
    ];
}

impl FromStr for PeriodWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ytd" => Ok(PeriodWindow::YearToDate),
            "12m" => Ok(PeriodWindow::TrailingYear),
            "all" => Ok(PeriodWindow::AllTime),
            other => Err(format!("unknown summary period: {}", other)),
        }
    }
}

/// One month of statement activity in base currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub total: f64,
    pub count: i64,
}

/// Per-month statement totals plus the grand total over the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementsSummary {
    pub months: Vec<MonthlyTotal>,
    pub total: f64,
    pub count: i64,
}

/// One month of a performance report, all values in base currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub year: i32,
    pub month: u32,
    pub dividends: f64,
    pub interest: f64,
    pub fees: f64,
    pub taxes: f64,
    pub realized_pnl: f64,
}

impl ReportRow {
    pub fn total(&self) -> f64 {
        self.dividends + self.interest + self.fees + self.taxes + self.realized_pnl
    }
}

/// One dividend or withholding-tax entry of a yearly tax report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxEntry {
    pub date: NaiveDate,
    pub country: Option<String>,
    pub description: String,
    /// "dividend" or "tax"
    pub kind: String,
    pub amount: f64,
    pub fx_rate: f64,
}

/// Tax report for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearReport {
    pub year: i32,
    pub entries: Vec<TaxEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_paths_round_trip() {
        for w in PeriodWindow::ALL {
            assert_eq!(w.as_str().parse::<PeriodWindow>().unwrap(), w);
        }
        assert!("last-week".parse::<PeriodWindow>().is_err());
    }

    #[test]
    fn test_window_starts() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(
            PeriodWindow::YearToDate.start(today),
            NaiveDate::from_ymd_opt(2026, 1, 1)
        );
        assert_eq!(
            PeriodWindow::TrailingYear.start(today),
            NaiveDate::from_ymd_opt(2025, 8, 30)
        );
        assert_eq!(PeriodWindow::AllTime.start(today), None);
    }
}
