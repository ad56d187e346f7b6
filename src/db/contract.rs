//! Contract queries and subtype-table mapping

use crate::db::{date_from_sql, ts_from_sql};
use crate::error::{AppError, Result};
use crate::models::{Contract, ContractDetails, OptionSide};
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(crate) const CONTRACT_COLS: &str = "c.id, c.symbol, c.security_type, c.exchange, c.currency, \
     c.bid, c.ask, c.last, c.previous_close, c.price_updated_at, \
     o.underlying_id, o.underlying_symbol, o.expiry, o.strike, o.side, o.multiplier, o.delta, \
     f.underlying_id, f.expiry, f.multiplier, \
     b.maturity, b.coupon";

pub(crate) const CONTRACT_JOINS: &str = "LEFT JOIN contract_option o ON o.id = c.id \
     LEFT JOIN contract_future f ON f.id = c.id \
     LEFT JOIN contract_bond b ON b.id = c.id";

/// Map a row selected with [`CONTRACT_COLS`] into a contract, reading the
/// subtype columns that match the security type.
pub(crate) fn map_contract_row(row: &Row<'_>) -> rusqlite::Result<Contract> {
    map_contract_row_at(row, 0)
}

/// Same as [`map_contract_row`] for queries whose contract columns start at
/// `base` instead of 0.
pub(crate) fn map_contract_row_at(row: &Row<'_>, base: usize) -> rusqlite::Result<Contract> {
    let type_str: String = row.get(base + 2)?;
    let details = match type_str.as_str() {
        "option" => {
            let side_str: String = row.get(base + 14)?;
            ContractDetails::Option {
                underlying_id: row.get(base + 10)?,
                underlying_symbol: row.get(base + 11)?,
                expiry: date_from_sql(base + 12, row.get(base + 12)?)?,
                strike: row.get(base + 13)?,
                side: OptionSide::parse(&side_str).ok_or_else(|| {
                    rusqlite::Error::InvalidColumnType(base + 14, side_str.clone(), rusqlite::types::Type::Text)
                })?,
                multiplier: row.get(base + 15)?,
                delta: row.get(base + 16)?,
                underlying_price: None,
            }
        }
        "future" => ContractDetails::Future {
            underlying_id: row.get(base + 17)?,
            expiry: date_from_sql(base + 18, row.get(base + 18)?)?,
            multiplier: row.get(base + 19)?,
        },
        "bond" => ContractDetails::Bond {
            maturity: date_from_sql(base + 20, row.get(base + 20)?)?,
            coupon: row.get(base + 21)?,
        },
        "stock" => ContractDetails::Stock,
        "cash" => ContractDetails::Cash,
        "index" => ContractDetails::Index,
        "bag" => ContractDetails::Bag,
        other => {
            return Err(rusqlite::Error::InvalidColumnType(
                base + 2,
                other.to_string(),
                rusqlite::types::Type::Text,
            ))
        }
    };

    let ts: Option<String> = row.get(base + 9)?;
    Ok(Contract {
        id: row.get(base)?,
        symbol: row.get(base + 1)?,
        exchange: row.get(base + 3)?,
        currency: row.get(base + 4)?,
        bid: row.get(base + 5)?,
        ask: row.get(base + 6)?,
        last: row.get(base + 7)?,
        previous_close: row.get(base + 8)?,
        price_updated_at: ts.map(|s| ts_from_sql(base + 9, s)).transpose()?,
        details,
    })
}

pub fn get(conn: &Connection, id: i64) -> Result<Contract> {
    let sql = format!(
        "SELECT {} FROM contract c {} WHERE c.id = ?",
        CONTRACT_COLS, CONTRACT_JOINS
    );
    conn.query_row(&sql, [id], map_contract_row)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("Contract {} not found", id)))
}

/// Insert a contract and its subtype row; the id on the passed value is
/// ignored and the assigned id returned.
pub fn insert(conn: &Connection, contract: &Contract) -> Result<i64> {
    conn.execute(
        "INSERT INTO contract (symbol, security_type, exchange, currency, bid, ask, last, previous_close, price_updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            contract.symbol,
            contract.security_type().as_str(),
            contract.exchange,
            contract.currency,
            contract.bid,
            contract.ask,
            contract.last,
            contract.previous_close,
            contract.price_updated_at.map(|t| t.to_rfc3339()),
        ],
    )?;
    let id = conn.last_insert_rowid();

    match &contract.details {
        ContractDetails::Option {
            underlying_id,
            underlying_symbol,
            expiry,
            strike,
            side,
            multiplier,
            delta,
            ..
        } => {
            conn.execute(
                "INSERT INTO contract_option (id, underlying_id, underlying_symbol, expiry, strike, side, multiplier, delta)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    id,
                    underlying_id,
                    underlying_symbol,
                    expiry.to_string(),
                    strike,
                    side.as_str(),
                    multiplier,
                    delta,
                ],
            )?;
        }
        ContractDetails::Future {
            underlying_id,
            expiry,
            multiplier,
        } => {
            conn.execute(
                "INSERT INTO contract_future (id, underlying_id, expiry, multiplier) VALUES (?, ?, ?, ?)",
                params![id, underlying_id, expiry.to_string(), multiplier],
            )?;
        }
        ContractDetails::Bond { maturity, coupon } => {
            conn.execute(
                "INSERT INTO contract_bond (id, maturity, coupon) VALUES (?, ?, ?)",
                params![id, maturity.to_string(), coupon],
            )?;
        }
        ContractDetails::Stock | ContractDetails::Cash | ContractDetails::Index | ContractDetails::Bag => {}
    }

    Ok(id)
}

/// Update the live price columns of one contract
pub fn update_quote(
    conn: &Connection,
    id: i64,
    bid: Option<f64>,
    ask: Option<f64>,
    last: Option<f64>,
) -> Result<()> {
    let changed = conn.execute(
        "UPDATE contract SET bid = ?, ask = ?, last = ?, price_updated_at = datetime('now') WHERE id = ?",
        params![bid, ask, last, id],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(format!("Contract {} not found", id)));
    }
    Ok(())
}

/// Apply a batch of quote updates in one transaction; an unknown id rolls
/// the whole batch back.
pub fn update_quotes(
    conn: &mut Connection,
    updates: &[(i64, Option<f64>, Option<f64>, Option<f64>)],
) -> Result<()> {
    let tx = conn.transaction()?;
    for &(id, bid, ask, last) in updates {
        update_quote(&tx, id, bid, ask, last)?;
    }
    tx.commit()?;
    Ok(())
}

/// All stock contracts, for the reference-data endpoint
pub fn list_stocks(conn: &Connection) -> Result<Vec<Contract>> {
    let sql = format!(
        "SELECT {} FROM contract c {} WHERE c.security_type = 'stock' ORDER BY c.symbol",
        CONTRACT_COLS, CONTRACT_JOINS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_contract_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// All option contracts written on the given underlying
pub fn list_options_for(conn: &Connection, underlying_id: i64) -> Result<Vec<Contract>> {
    let sql = format!(
        "SELECT {} FROM contract c {} WHERE o.underlying_id = ? ORDER BY o.expiry, o.strike",
        CONTRACT_COLS, CONTRACT_JOINS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([underlying_id], map_contract_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Underlying symbol used when linking a statement to a trade: the option's
/// underlying for options, the contract's own symbol otherwise.
pub fn underlying_symbol(conn: &Connection, contract_id: i64) -> Result<String> {
    let contract = get(conn, contract_id)?;
    Ok(match contract.details {
        ContractDetails::Option {
            underlying_symbol, ..
        } => underlying_symbol,
        _ => contract.symbol,
    })
}
