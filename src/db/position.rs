//! Position queries

use crate::db::contract::{map_contract_row_at, CONTRACT_COLS, CONTRACT_JOINS};
use crate::error::Result;
use crate::models::contract::{best_price, ContractDetails};
use crate::models::Position;
use rusqlite::{params, Connection, Row};

/// Position columns precede the contract columns in all queries below
fn map_position_row(row: &Row<'_>) -> rusqlite::Result<Position> {
    Ok(Position {
        id: row.get(0)?,
        portfolio_id: row.get(1)?,
        quantity: row.get(2)?,
        cost_basis: row.get(3)?,
        base_rate: row.get(4)?,
        contract: map_contract_row_at(row, 5)?,
    })
}

pub fn list(conn: &Connection, portfolio_id: i64) -> Result<Vec<Position>> {
    let sql = format!(
        "SELECT p.id, p.portfolio_id, p.quantity, p.cost_basis, p.base_rate, {}
         FROM position p JOIN contract c ON c.id = p.contract_id {}
         WHERE p.portfolio_id = ?
         ORDER BY c.symbol",
        CONTRACT_COLS, CONTRACT_JOINS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([portfolio_id], map_position_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Option positions, each with the live price of its underlying filled in
pub fn list_options(conn: &Connection, portfolio_id: i64) -> Result<Vec<Position>> {
    let sql = format!(
        "SELECT p.id, p.portfolio_id, p.quantity, p.cost_basis, p.base_rate, {},
                u.bid, u.ask, u.last, u.previous_close
         FROM position p JOIN contract c ON c.id = p.contract_id {}
         LEFT JOIN contract u ON u.id = o.underlying_id
         WHERE p.portfolio_id = ? AND c.security_type = 'option'
         ORDER BY o.expiry, c.symbol, o.strike",
        CONTRACT_COLS, CONTRACT_JOINS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([portfolio_id], |row| {
        let mut position = map_position_row(row)?;
        // Underlying price columns follow the 5 position + 22 contract columns
        let underlying = best_price(row.get(27)?, row.get(28)?, row.get(29)?, row.get(30)?);
        if let ContractDetails::Option {
            underlying_price, ..
        } = &mut position.contract.details
        {
            *underlying_price = underlying;
        }
        Ok(position)
    })?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

pub fn insert(conn: &Connection, position: &Position) -> Result<i64> {
    conn.execute(
        "INSERT INTO position (portfolio_id, contract_id, quantity, cost_basis, base_rate)
         VALUES (?, ?, ?, ?, ?)",
        params![
            position.portfolio_id,
            position.contract.id,
            position.quantity,
            position.cost_basis,
            position.base_rate,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
