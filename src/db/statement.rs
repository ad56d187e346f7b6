//! Statement queries: month listings, item lookup, trade linking, summaries

use crate::db::date_from_sql;
use crate::error::{AppError, Result};
use crate::models::{MonthlyTotal, Statement, StatementKind, StatementsSummary, TaxEntry};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

const STATEMENT_COLS: &str = "id, portfolio_id, trade_id, contract_id, statement_type, date, \
     currency, amount, fx_rate, description, quantity, price, proceeds, fees, realized_pnl, country";

fn map_statement_row(row: &Row<'_>) -> rusqlite::Result<Statement> {
    let type_str: String = row.get(4)?;
    let kind = match type_str.as_str() {
        "equity" => StatementKind::Equity {
            quantity: row.get::<_, Option<f64>>(10)?.unwrap_or(0.0),
            price: row.get(11)?,
            proceeds: row.get(12)?,
            fees: row.get(13)?,
            realized_pnl: row.get(14)?,
        },
        "option" => StatementKind::OptionTrade {
            quantity: row.get::<_, Option<f64>>(10)?.unwrap_or(0.0),
            price: row.get(11)?,
            proceeds: row.get(12)?,
            fees: row.get(13)?,
            realized_pnl: row.get(14)?,
        },
        "dividend" => StatementKind::Dividend {
            country: row.get(15)?,
        },
        "tax" => StatementKind::Tax {
            country: row.get(15)?,
        },
        "interest" => StatementKind::Interest,
        "fee" => StatementKind::Fee,
        "corporate_action" => StatementKind::CorporateAction,
        _ => StatementKind::Other,
    };

    Ok(Statement {
        id: row.get(0)?,
        portfolio_id: row.get(1)?,
        trade_id: row.get(2)?,
        contract_id: row.get(3)?,
        date: date_from_sql(5, row.get(5)?)?,
        currency: row.get(6)?,
        amount: row.get(7)?,
        fx_rate: row.get(8)?,
        description: row.get(9)?,
        kind,
    })
}

pub fn get(conn: &Connection, portfolio_id: i64, statement_id: i64) -> Result<Statement> {
    let sql = format!(
        "SELECT {} FROM statement WHERE portfolio_id = ? AND id = ?",
        STATEMENT_COLS
    );
    conn.query_row(&sql, [portfolio_id, statement_id], map_statement_row)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("Statement {} not found", statement_id)))
}

/// Statements of one calendar month, ordered by date then id
pub fn for_month(
    conn: &Connection,
    portfolio_id: i64,
    year: i32,
    month: u32,
) -> Result<Vec<Statement>> {
    let sql = format!(
        "SELECT {} FROM statement
         WHERE portfolio_id = ?
           AND CAST(strftime('%Y', date) AS INTEGER) = ?
           AND CAST(strftime('%m', date) AS INTEGER) = ?
         ORDER BY date, id",
        STATEMENT_COLS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![portfolio_id, year, month], map_statement_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Statements linked to one trade, ordered by date then id
pub fn for_trade(conn: &Connection, trade_id: i64) -> Result<Vec<Statement>> {
    let sql = format!(
        "SELECT {} FROM statement WHERE trade_id = ? ORDER BY date, id",
        STATEMENT_COLS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([trade_id], map_statement_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Link or unlink a statement to a trade
pub fn set_trade(
    conn: &Connection,
    portfolio_id: i64,
    statement_id: i64,
    trade_id: Option<i64>,
) -> Result<()> {
    let changed = conn.execute(
        "UPDATE statement SET trade_id = ? WHERE portfolio_id = ? AND id = ?",
        params![trade_id, portfolio_id, statement_id],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(format!(
            "Statement {} not found",
            statement_id
        )));
    }
    Ok(())
}

/// Per-month totals in base currency from `start` onward (all time when None)
pub fn monthly_summary(
    conn: &Connection,
    portfolio_id: i64,
    start: Option<NaiveDate>,
) -> Result<StatementsSummary> {
    let start = start.map(|d| d.to_string()).unwrap_or_default();
    let mut stmt = conn.prepare(
        "SELECT CAST(strftime('%Y', date) AS INTEGER),
                CAST(strftime('%m', date) AS INTEGER),
                SUM(amount * fx_rate),
                COUNT(*)
         FROM statement
         WHERE portfolio_id = ? AND date >= ?
         GROUP BY 1, 2
         ORDER BY 1, 2",
    )?;
    let months = stmt
        .query_map(params![portfolio_id, start], |row| {
            Ok(MonthlyTotal {
                year: row.get(0)?,
                month: row.get(1)?,
                total: row.get(2)?,
                count: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let total = months.iter().map(|m| m.total).sum();
    let count = months.iter().map(|m| m.count).sum();
    Ok(StatementsSummary {
        months,
        total,
        count,
    })
}

/// Dividend and withholding-tax entries of one calendar year
pub fn tax_entries(conn: &Connection, portfolio_id: i64, year: i32) -> Result<Vec<TaxEntry>> {
    let mut stmt = conn.prepare(
        "SELECT date, country, description, statement_type, amount, fx_rate
         FROM statement
         WHERE portfolio_id = ?
           AND statement_type IN ('dividend', 'tax')
           AND CAST(strftime('%Y', date) AS INTEGER) = ?
         ORDER BY date, id",
    )?;
    let rows = stmt
        .query_map(params![portfolio_id, year], |row| {
            Ok(TaxEntry {
                date: date_from_sql(0, row.get(0)?)?,
                country: row.get(1)?,
                description: row.get(2)?,
                kind: row.get(3)?,
                amount: row.get(4)?,
                fx_rate: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Insert a statement; the id on the passed value is ignored
pub fn insert(conn: &Connection, s: &Statement) -> Result<i64> {
    let (quantity, price, proceeds, fees, realized_pnl) = match &s.kind {
        StatementKind::Equity {
            quantity,
            price,
            proceeds,
            fees,
            realized_pnl,
        }
        | StatementKind::OptionTrade {
            quantity,
            price,
            proceeds,
            fees,
            realized_pnl,
        } => (Some(*quantity), *price, *proceeds, *fees, *realized_pnl),
        _ => (None, None, None, None, None),
    };
    let country = match &s.kind {
        StatementKind::Dividend { country } | StatementKind::Tax { country } => country.clone(),
        _ => None,
    };

    conn.execute(
        "INSERT INTO statement (portfolio_id, trade_id, contract_id, statement_type, date, currency,
                                amount, fx_rate, description, quantity, price, proceeds, fees, realized_pnl, country)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            s.portfolio_id,
            s.trade_id,
            s.contract_id,
            s.kind.type_name(),
            s.date.to_string(),
            s.currency,
            s.amount,
            s.fx_rate,
            s.description,
            quantity,
            price,
            proceeds,
            fees,
            realized_pnl,
            country,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
