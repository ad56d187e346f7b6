//! Open order queries

use crate::error::{AppError, Result};
use crate::models::OpenOrder;
use rusqlite::{params, Connection, Row};

fn map_order_row(row: &Row<'_>) -> rusqlite::Result<OpenOrder> {
    Ok(OpenOrder {
        id: row.get(0)?,
        portfolio_id: row.get(1)?,
        contract_id: row.get(2)?,
        symbol: row.get(3)?,
        action: row.get(4)?,
        quantity: row.get(5)?,
        limit_price: row.get(6)?,
        status: row.get(7)?,
    })
}

pub fn list(conn: &Connection, portfolio_id: i64) -> Result<Vec<OpenOrder>> {
    let mut stmt = conn.prepare(
        "SELECT oo.id, oo.portfolio_id, oo.contract_id, c.symbol, oo.action, oo.quantity, oo.limit_price, oo.status
         FROM open_order oo JOIN contract c ON c.id = oo.contract_id
         WHERE oo.portfolio_id = ?
         ORDER BY oo.id",
    )?;
    let rows = stmt.query_map([portfolio_id], map_order_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

pub fn insert(
    conn: &Connection,
    portfolio_id: i64,
    contract_id: i64,
    action: &str,
    quantity: f64,
    limit_price: Option<f64>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO open_order (portfolio_id, contract_id, action, quantity, limit_price)
         VALUES (?, ?, ?, ?, ?)",
        params![portfolio_id, contract_id, action, quantity, limit_price],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete(conn: &Connection, portfolio_id: i64, order_id: i64) -> Result<()> {
    let changed = conn.execute(
        "DELETE FROM open_order WHERE portfolio_id = ? AND id = ?",
        [portfolio_id, order_id],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(format!("Order {} not found", order_id)));
    }
    Ok(())
}
