//! SQLite database migrations
//!
//! Contract subtype tables (option/future/bond) share the contract table's
//! primary key, one row per contract of that security type.

use crate::error::Result;
use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS migrations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    run_migration(conn, "001_portfolio", CREATE_PORTFOLIO_TABLE)?;
    run_migration(conn, "002_contract", CREATE_CONTRACT_TABLE)?;
    run_migration(conn, "003_contract_option", CREATE_CONTRACT_OPTION_TABLE)?;
    run_migration(conn, "004_contract_future", CREATE_CONTRACT_FUTURE_TABLE)?;
    run_migration(conn, "005_contract_bond", CREATE_CONTRACT_BOND_TABLE)?;
    run_migration(conn, "006_trade", CREATE_TRADE_TABLE)?;
    run_migration(conn, "007_statement", CREATE_STATEMENT_TABLE)?;
    run_migration(conn, "008_position", CREATE_POSITION_TABLE)?;
    run_migration(conn, "009_balance", CREATE_BALANCE_TABLE)?;
    run_migration(conn, "010_setting", CREATE_SETTING_TABLE)?;
    run_migration(conn, "011_open_order", CREATE_OPEN_ORDER_TABLE)?;

    tracing::info!("Database migrations completed");
    Ok(())
}

fn run_migration(conn: &Connection, name: &str, sql: &str) -> Result<()> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM migrations WHERE name = ?)",
        [name],
        |row| row.get(0),
    )?;

    if !exists {
        tracing::info!("Running migration: {}", name);
        conn.execute_batch(sql)?;
        conn.execute("INSERT INTO migrations (name) VALUES (?)", [name])?;
    }

    Ok(())
}

const CREATE_PORTFOLIO_TABLE: &str = r#"
CREATE TABLE portfolio (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    account TEXT NOT NULL,
    base_currency TEXT NOT NULL DEFAULT 'USD',
    benchmark_symbol TEXT,
    cash_strategy TEXT NOT NULL DEFAULT 'deposit',
    country TEXT
);
"#;

const CREATE_CONTRACT_TABLE: &str = r#"
CREATE TABLE contract (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    symbol TEXT NOT NULL,
    security_type TEXT NOT NULL,
    exchange TEXT,
    currency TEXT NOT NULL DEFAULT 'USD',
    bid REAL,
    ask REAL,
    last REAL,
    previous_close REAL,
    price_updated_at TEXT
);
CREATE INDEX idx_contract_symbol ON contract(symbol);
CREATE INDEX idx_contract_type ON contract(security_type);
"#;

const CREATE_CONTRACT_OPTION_TABLE: &str = r#"
CREATE TABLE contract_option (
    id INTEGER PRIMARY KEY REFERENCES contract(id),
    underlying_id INTEGER REFERENCES contract(id),
    underlying_symbol TEXT NOT NULL,
    expiry TEXT NOT NULL,
    strike REAL NOT NULL,
    side TEXT NOT NULL,
    multiplier REAL NOT NULL DEFAULT 100,
    delta REAL
);
CREATE INDEX idx_contract_option_underlying ON contract_option(underlying_id);
"#;

const CREATE_CONTRACT_FUTURE_TABLE: &str = r#"
CREATE TABLE contract_future (
    id INTEGER PRIMARY KEY REFERENCES contract(id),
    underlying_id INTEGER REFERENCES contract(id),
    expiry TEXT NOT NULL,
    multiplier REAL NOT NULL DEFAULT 1
);
"#;

const CREATE_CONTRACT_BOND_TABLE: &str = r#"
CREATE TABLE contract_bond (
    id INTEGER PRIMARY KEY REFERENCES contract(id),
    maturity TEXT NOT NULL,
    coupon REAL
);
"#;

const CREATE_TRADE_TABLE: &str = r#"
CREATE TABLE trade (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    portfolio_id INTEGER NOT NULL REFERENCES portfolio(id),
    symbol TEXT NOT NULL,
    strategy INTEGER NOT NULL DEFAULT 0,
    status TEXT NOT NULL DEFAULT 'open',
    opened_at TEXT NOT NULL,
    closed_at TEXT,
    comment TEXT,
    risk REAL
);
CREATE INDEX idx_trade_portfolio ON trade(portfolio_id);
CREATE INDEX idx_trade_status ON trade(portfolio_id, status);
"#;

const CREATE_STATEMENT_TABLE: &str = r#"
CREATE TABLE statement (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    portfolio_id INTEGER NOT NULL REFERENCES portfolio(id),
    trade_id INTEGER REFERENCES trade(id),
    contract_id INTEGER REFERENCES contract(id),
    statement_type TEXT NOT NULL,
    date TEXT NOT NULL,
    currency TEXT NOT NULL DEFAULT 'USD',
    amount REAL NOT NULL DEFAULT 0,
    fx_rate REAL NOT NULL DEFAULT 1,
    description TEXT NOT NULL DEFAULT '',
    quantity REAL,
    price REAL,
    proceeds REAL,
    fees REAL,
    realized_pnl REAL,
    country TEXT
);
CREATE INDEX idx_statement_portfolio_date ON statement(portfolio_id, date);
CREATE INDEX idx_statement_trade ON statement(trade_id);
"#;

const CREATE_POSITION_TABLE: &str = r#"
CREATE TABLE position (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    portfolio_id INTEGER NOT NULL REFERENCES portfolio(id),
    contract_id INTEGER NOT NULL REFERENCES contract(id),
    quantity REAL NOT NULL DEFAULT 0,
    cost_basis REAL NOT NULL DEFAULT 0,
    base_rate REAL NOT NULL DEFAULT 1,
    UNIQUE(portfolio_id, contract_id)
);
"#;

const CREATE_BALANCE_TABLE: &str = r#"
CREATE TABLE balance (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    portfolio_id INTEGER NOT NULL REFERENCES portfolio(id),
    currency TEXT NOT NULL,
    quantity REAL NOT NULL DEFAULT 0,
    UNIQUE(portfolio_id, currency)
);
"#;

const CREATE_SETTING_TABLE: &str = r#"
CREATE TABLE setting (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    portfolio_id INTEGER NOT NULL REFERENCES portfolio(id),
    symbol TEXT NOT NULL,
    nav_ratio REAL NOT NULL DEFAULT 0,
    csp_strategy INTEGER NOT NULL DEFAULT 0,
    cc_strategy INTEGER NOT NULL DEFAULT 0,
    csp_delta REAL NOT NULL DEFAULT 0,
    cc_delta REAL NOT NULL DEFAULT 0,
    roll_put_days INTEGER NOT NULL DEFAULT 0,
    roll_call_days INTEGER NOT NULL DEFAULT 0,
    UNIQUE(portfolio_id, symbol)
);
"#;

const CREATE_OPEN_ORDER_TABLE: &str = r#"
CREATE TABLE open_order (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    portfolio_id INTEGER NOT NULL REFERENCES portfolio(id),
    contract_id INTEGER NOT NULL REFERENCES contract(id),
    action TEXT NOT NULL,
    quantity REAL NOT NULL,
    limit_price REAL,
    status TEXT NOT NULL DEFAULT 'submitted'
);
CREATE INDEX idx_open_order_portfolio ON open_order(portfolio_id);
"#;
