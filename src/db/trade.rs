//! Trade queries

use crate::db::{date_from_sql, statement};
use crate::error::{AppError, Result};
use crate::models::{Trade, TradeStatus, TradeStrategy};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Trade columns plus the P&L subquery over linked statements
const TRADE_COLS: &str = "t.id, t.portfolio_id, t.symbol, t.strategy, t.status, t.opened_at, \
     t.closed_at, t.comment, t.risk, \
     COALESCE((SELECT SUM(s.amount * s.fx_rate) FROM statement s WHERE s.trade_id = t.id), 0)";

fn map_trade_row(row: &Row<'_>) -> rusqlite::Result<Trade> {
    let strategy_code: i32 = row.get(3)?;
    let status_str: String = row.get(4)?;
    let closed_at: Option<String> = row.get(6)?;
    Ok(Trade {
        id: row.get(0)?,
        portfolio_id: row.get(1)?,
        symbol: row.get(2)?,
        strategy: TradeStrategy::try_from(strategy_code).unwrap_or(TradeStrategy::Undefined),
        status: TradeStatus::parse(&status_str).unwrap_or(TradeStatus::Open),
        opened_at: date_from_sql(5, row.get(5)?)?,
        closed_at: closed_at.map(|s| date_from_sql(6, s)).transpose()?,
        comment: row.get(7)?,
        risk: row.get(8)?,
        pnl: row.get(9)?,
        statements: Vec::new(),
    })
}

/// Fetch one trade with its linked statements
pub fn get(conn: &Connection, portfolio_id: i64, trade_id: i64) -> Result<Trade> {
    let sql = format!(
        "SELECT {} FROM trade t WHERE t.portfolio_id = ? AND t.id = ?",
        TRADE_COLS
    );
    let mut trade = conn
        .query_row(&sql, [portfolio_id, trade_id], map_trade_row)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("Trade {} not found", trade_id)))?;
    trade.statements = statement::for_trade(conn, trade.id)?;
    Ok(trade)
}

/// Trades closed on or after `start` plus all open trades (all trades when
/// `start` is None), newest first.
pub fn list_for_window(
    conn: &Connection,
    portfolio_id: i64,
    start: Option<NaiveDate>,
) -> Result<Vec<Trade>> {
    let sql = format!(
        "SELECT {} FROM trade t
         WHERE t.portfolio_id = ?
           AND (t.status = 'open' OR t.closed_at IS NULL OR t.closed_at >= ?)
         ORDER BY t.opened_at DESC, t.id DESC",
        TRADE_COLS
    );
    let start = start.map(|d| d.to_string()).unwrap_or_default();
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![portfolio_id, start], map_trade_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Open trade on the given underlying, if any (newest wins)
pub fn find_open_by_symbol(
    conn: &Connection,
    portfolio_id: i64,
    symbol: &str,
) -> Result<Option<i64>> {
    let id = conn
        .query_row(
            "SELECT id FROM trade
             WHERE portfolio_id = ? AND symbol = ? AND status = 'open'
             ORDER BY opened_at DESC, id DESC LIMIT 1",
            params![portfolio_id, symbol],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

pub fn insert(
    conn: &Connection,
    portfolio_id: i64,
    symbol: &str,
    strategy: TradeStrategy,
    opened_at: NaiveDate,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO trade (portfolio_id, symbol, strategy, status, opened_at) VALUES (?, ?, ?, 'open', ?)",
        params![portfolio_id, symbol, i32::from(strategy), opened_at.to_string()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Editable fields of a trade
#[derive(Debug, Clone)]
pub struct TradeUpdate {
    pub strategy: TradeStrategy,
    pub status: TradeStatus,
    pub closed_at: Option<NaiveDate>,
    pub comment: Option<String>,
    pub risk: Option<f64>,
}

pub fn update(
    conn: &Connection,
    portfolio_id: i64,
    trade_id: i64,
    update: &TradeUpdate,
) -> Result<()> {
    let changed = conn.execute(
        "UPDATE trade SET strategy = ?, status = ?, closed_at = ?, comment = ?, risk = ?
         WHERE portfolio_id = ? AND id = ?",
        params![
            i32::from(update.strategy),
            update.status.as_str(),
            update.closed_at.map(|d| d.to_string()),
            update.comment,
            update.risk,
            portfolio_id,
            trade_id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(format!("Trade {} not found", trade_id)));
    }
    Ok(())
}

/// Delete a trade, unlinking its statements first
pub fn delete(conn: &Connection, portfolio_id: i64, trade_id: i64) -> Result<()> {
    conn.execute(
        "UPDATE statement SET trade_id = NULL WHERE trade_id = ?",
        [trade_id],
    )?;
    let changed = conn.execute(
        "DELETE FROM trade WHERE portfolio_id = ? AND id = ?",
        [portfolio_id, trade_id],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(format!("Trade {} not found", trade_id)));
    }
    Ok(())
}

/// Check a trade exists inside the portfolio
pub fn exists(conn: &Connection, portfolio_id: i64, trade_id: i64) -> Result<bool> {
    let found: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM trade WHERE portfolio_id = ? AND id = ?)",
        [portfolio_id, trade_id],
        |row| row.get(0),
    )?;
    Ok(found)
}
