//! Cash balance queries

use crate::error::{AppError, Result};
use crate::models::Balance;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn map_balance_row(row: &Row<'_>) -> rusqlite::Result<Balance> {
    Ok(Balance {
        id: row.get(0)?,
        portfolio_id: row.get(1)?,
        currency: row.get(2)?,
        quantity: row.get(3)?,
    })
}

pub fn list(conn: &Connection, portfolio_id: i64) -> Result<Vec<Balance>> {
    let mut stmt = conn.prepare(
        "SELECT id, portfolio_id, currency, quantity FROM balance WHERE portfolio_id = ? ORDER BY currency",
    )?;
    let rows = stmt.query_map([portfolio_id], map_balance_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

pub fn get(conn: &Connection, portfolio_id: i64, balance_id: i64) -> Result<Balance> {
    conn.query_row(
        "SELECT id, portfolio_id, currency, quantity FROM balance WHERE portfolio_id = ? AND id = ?",
        [portfolio_id, balance_id],
        map_balance_row,
    )
    .optional()?
    .ok_or_else(|| AppError::NotFound(format!("Balance {} not found", balance_id)))
}

pub fn update(
    conn: &Connection,
    portfolio_id: i64,
    balance_id: i64,
    currency: &str,
    quantity: f64,
) -> Result<Balance> {
    let changed = conn.execute(
        "UPDATE balance SET currency = ?, quantity = ? WHERE portfolio_id = ? AND id = ?",
        params![currency, quantity, portfolio_id, balance_id],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(format!(
            "Balance {} not found",
            balance_id
        )));
    }
    get(conn, portfolio_id, balance_id)
}

pub fn insert(
    conn: &Connection,
    portfolio_id: i64,
    currency: &str,
    quantity: f64,
) -> Result<Balance> {
    conn.execute(
        "INSERT INTO balance (portfolio_id, currency, quantity) VALUES (?, ?, ?)",
        params![portfolio_id, currency, quantity],
    )?;
    get(conn, portfolio_id, conn.last_insert_rowid())
}

pub fn delete(conn: &Connection, portfolio_id: i64, balance_id: i64) -> Result<()> {
    let changed = conn.execute(
        "DELETE FROM balance WHERE portfolio_id = ? AND id = ?",
        [portfolio_id, balance_id],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(format!(
            "Balance {} not found",
            balance_id
        )));
    }
    Ok(())
}
