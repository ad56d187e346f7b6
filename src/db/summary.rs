//! Performance report aggregation

use crate::error::Result;
use crate::models::ReportRow;
use chrono::NaiveDate;
use rusqlite::{params, Connection};

/// Per-month report rows in base currency from `start` onward.
///
/// Dividends/interest/fees/taxes come from the statement amounts of their
/// type; realized P&L comes from the realized column of trade statements.
pub fn report_rows(
    conn: &Connection,
    portfolio_id: i64,
    start: Option<NaiveDate>,
) -> Result<Vec<ReportRow>> {
    let start = start.map(|d| d.to_string()).unwrap_or_default();
    let mut stmt = conn.prepare(
        "SELECT CAST(strftime('%Y', date) AS INTEGER),
                CAST(strftime('%m', date) AS INTEGER),
                SUM(CASE WHEN statement_type = 'dividend' THEN amount * fx_rate ELSE 0 END),
                SUM(CASE WHEN statement_type = 'interest' THEN amount * fx_rate ELSE 0 END),
                SUM(CASE WHEN statement_type = 'fee' THEN amount * fx_rate ELSE 0 END),
                SUM(CASE WHEN statement_type = 'tax' THEN amount * fx_rate ELSE 0 END),
                SUM(CASE WHEN statement_type IN ('equity', 'option')
                         THEN COALESCE(realized_pnl, 0) * fx_rate ELSE 0 END)
         FROM statement
         WHERE portfolio_id = ? AND date >= ?
         GROUP BY 1, 2
         ORDER BY 1, 2",
    )?;
    let rows = stmt
        .query_map(params![portfolio_id, start], |row| {
            Ok(ReportRow {
                year: row.get(0)?,
                month: row.get(1)?,
                dividends: row.get(2)?,
                interest: row.get(3)?,
                fees: row.get(4)?,
                taxes: row.get(5)?,
                realized_pnl: row.get(6)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}
