//! Portfolio queries

use crate::db::setting;
use crate::error::{AppError, Result};
use crate::models::{CashStrategy, Portfolio};
use rusqlite::{params, Connection, OptionalExtension, Row};

const PORTFOLIO_COLS: &str =
    "id, name, account, base_currency, benchmark_symbol, cash_strategy, country";

fn map_portfolio_row(row: &Row<'_>) -> rusqlite::Result<Portfolio> {
    let cash_str: String = row.get(5)?;
    Ok(Portfolio {
        id: row.get(0)?,
        name: row.get(1)?,
        account: row.get(2)?,
        base_currency: row.get(3)?,
        benchmark_symbol: row.get(4)?,
        cash_strategy: CashStrategy::parse(&cash_str).unwrap_or(CashStrategy::Deposit),
        country: row.get(6)?,
        settings: Vec::new(),
    })
}

pub fn list(conn: &Connection) -> Result<Vec<Portfolio>> {
    let sql = format!("SELECT {} FROM portfolio ORDER BY name", PORTFOLIO_COLS);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_portfolio_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Fetch one portfolio with its settings list
pub fn get(conn: &Connection, id: i64) -> Result<Portfolio> {
    let sql = format!("SELECT {} FROM portfolio WHERE id = ?", PORTFOLIO_COLS);
    let mut portfolio = conn
        .query_row(&sql, [id], map_portfolio_row)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("Portfolio {} not found", id)))?;
    portfolio.settings = setting::list(conn, id)?;
    Ok(portfolio)
}

pub fn insert(conn: &Connection, portfolio: &Portfolio) -> Result<i64> {
    conn.execute(
        "INSERT INTO portfolio (name, account, base_currency, benchmark_symbol, cash_strategy, country)
         VALUES (?, ?, ?, ?, ?, ?)",
        params![
            portfolio.name,
            portfolio.account,
            portfolio.base_currency,
            portfolio.benchmark_symbol,
            portfolio.cash_strategy.as_str(),
            portfolio.country,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
