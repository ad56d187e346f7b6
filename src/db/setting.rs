//! Strategy setting queries

use crate::error::{AppError, Result};
use crate::models::Setting;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SETTING_COLS: &str = "id, portfolio_id, symbol, nav_ratio, csp_strategy, cc_strategy, \
     csp_delta, cc_delta, roll_put_days, roll_call_days";

fn map_setting_row(row: &Row<'_>) -> rusqlite::Result<Setting> {
    Ok(Setting {
        id: row.get(0)?,
        portfolio_id: row.get(1)?,
        symbol: row.get(2)?,
        nav_ratio: row.get(3)?,
        csp_strategy: row.get(4)?,
        cc_strategy: row.get(5)?,
        csp_delta: row.get(6)?,
        cc_delta: row.get(7)?,
        roll_put_days: row.get(8)?,
        roll_call_days: row.get(9)?,
    })
}

pub fn list(conn: &Connection, portfolio_id: i64) -> Result<Vec<Setting>> {
    let sql = format!(
        "SELECT {} FROM setting WHERE portfolio_id = ? ORDER BY symbol",
        SETTING_COLS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([portfolio_id], map_setting_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

pub fn get(conn: &Connection, portfolio_id: i64, setting_id: i64) -> Result<Setting> {
    let sql = format!(
        "SELECT {} FROM setting WHERE portfolio_id = ? AND id = ?",
        SETTING_COLS
    );
    conn.query_row(&sql, [portfolio_id, setting_id], map_setting_row)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("Setting {} not found", setting_id)))
}

/// Field values of a create or save; ids come from the route
#[derive(Debug, Clone)]
pub struct SettingValues {
    pub symbol: String,
    pub nav_ratio: f64,
    pub csp_strategy: i32,
    pub cc_strategy: i32,
    pub csp_delta: f64,
    pub cc_delta: f64,
    pub roll_put_days: i32,
    pub roll_call_days: i32,
}

pub fn insert(conn: &Connection, portfolio_id: i64, values: &SettingValues) -> Result<Setting> {
    conn.execute(
        "INSERT INTO setting (portfolio_id, symbol, nav_ratio, csp_strategy, cc_strategy,
                              csp_delta, cc_delta, roll_put_days, roll_call_days)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            portfolio_id,
            values.symbol,
            values.nav_ratio,
            values.csp_strategy,
            values.cc_strategy,
            values.csp_delta,
            values.cc_delta,
            values.roll_put_days,
            values.roll_call_days,
        ],
    )?;
    get(conn, portfolio_id, conn.last_insert_rowid())
}

pub fn update(
    conn: &Connection,
    portfolio_id: i64,
    setting_id: i64,
    values: &SettingValues,
) -> Result<Setting> {
    let changed = conn.execute(
        "UPDATE setting SET symbol = ?, nav_ratio = ?, csp_strategy = ?, cc_strategy = ?,
                            csp_delta = ?, cc_delta = ?, roll_put_days = ?, roll_call_days = ?
         WHERE portfolio_id = ? AND id = ?",
        params![
            values.symbol,
            values.nav_ratio,
            values.csp_strategy,
            values.cc_strategy,
            values.csp_delta,
            values.cc_delta,
            values.roll_put_days,
            values.roll_call_days,
            portfolio_id,
            setting_id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(format!(
            "Setting {} not found",
            setting_id
        )));
    }
    get(conn, portfolio_id, setting_id)
}

pub fn delete(conn: &Connection, portfolio_id: i64, setting_id: i64) -> Result<()> {
    let changed = conn.execute(
        "DELETE FROM setting WHERE portfolio_id = ? AND id = ?",
        [portfolio_id, setting_id],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(format!(
            "Setting {} not found",
            setting_id
        )));
    }
    Ok(())
}
