//! SQLite data layer
//!
//! Schema, migrations and row mapping live here, separate from the plain
//! model structs in `crate::models`. Access goes through [`FolioDb`], one
//! public method per query, delegating to per-table modules.

pub mod balance;
pub mod contract;
pub mod migrations;
pub mod order;
pub mod portfolio;
pub mod position;
pub mod setting;
pub mod statement;
pub mod summary;
pub mod trade;

pub use setting::SettingValues;
pub use trade::TradeUpdate;

use crate::error::Result;
use crate::models::{
    Balance, Contract, OpenOrder, PeriodWindow, Portfolio, Position, ReportRow, Setting,
    Statement, StatementsSummary, TaxEntry, Trade, TradeStrategy,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;

/// Parse a TEXT date column, reporting failures as column conversion errors
pub(crate) fn date_from_sql(idx: usize, s: String) -> rusqlite::Result<NaiveDate> {
    s.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a TEXT timestamp column; accepts RFC 3339 and SQLite's datetime('now')
pub(crate) fn ts_from_sql(idx: usize, s: String) -> rusqlite::Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(&s) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// SQLite database wrapper
pub struct FolioDb {
    conn: Mutex<Connection>,
}

impl FolioDb {
    /// Open (or create) the database file and run migrations
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for better concurrent access
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.run_migrations()?;
        Ok(db)
    }

    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn.lock();
        migrations::run_migrations(&conn)
    }

    // ========== Portfolios ==========

    pub fn list_portfolios(&self) -> Result<Vec<Portfolio>> {
        let conn = self.conn.lock();
        portfolio::list(&conn)
    }

    /// Portfolio with its settings list
    pub fn get_portfolio(&self, id: i64) -> Result<Portfolio> {
        let conn = self.conn.lock();
        portfolio::get(&conn, id)
    }

    pub fn insert_portfolio(&self, p: &Portfolio) -> Result<i64> {
        let conn = self.conn.lock();
        portfolio::insert(&conn, p)
    }

    // ========== Contracts ==========

    pub fn get_contract(&self, id: i64) -> Result<Contract> {
        let conn = self.conn.lock();
        contract::get(&conn, id)
    }

    pub fn insert_contract(&self, c: &Contract) -> Result<i64> {
        let conn = self.conn.lock();
        contract::insert(&conn, c)
    }

    pub fn update_contract_quotes(
        &self,
        updates: &[(i64, Option<f64>, Option<f64>, Option<f64>)],
    ) -> Result<()> {
        let mut conn = self.conn.lock();
        contract::update_quotes(&mut conn, updates)
    }

    pub fn list_stock_contracts(&self) -> Result<Vec<Contract>> {
        let conn = self.conn.lock();
        contract::list_stocks(&conn)
    }

    pub fn list_option_contracts(&self, underlying_id: i64) -> Result<Vec<Contract>> {
        let conn = self.conn.lock();
        contract::list_options_for(&conn, underlying_id)
    }

    // ========== Statements ==========

    pub fn get_statement(&self, portfolio_id: i64, statement_id: i64) -> Result<Statement> {
        let conn = self.conn.lock();
        statement::get(&conn, portfolio_id, statement_id)
    }

    pub fn statements_for_month(
        &self,
        portfolio_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<Statement>> {
        let conn = self.conn.lock();
        statement::for_month(&conn, portfolio_id, year, month)
    }

    pub fn statements_summary(
        &self,
        portfolio_id: i64,
        window: PeriodWindow,
        today: NaiveDate,
    ) -> Result<StatementsSummary> {
        let conn = self.conn.lock();
        statement::monthly_summary(&conn, portfolio_id, window.start(today))
    }

    pub fn insert_statement(&self, s: &Statement) -> Result<i64> {
        let conn = self.conn.lock();
        statement::insert(&conn, s)
    }

    /// Create a new open trade from a statement and link the statement to it
    pub fn create_trade_for_statement(
        &self,
        portfolio_id: i64,
        statement_id: i64,
        symbol: &str,
        strategy: TradeStrategy,
    ) -> Result<Trade> {
        let conn = self.conn.lock();
        let stmt = statement::get(&conn, portfolio_id, statement_id)?;
        let trade_id = trade::insert(&conn, portfolio_id, symbol, strategy, stmt.date)?;
        statement::set_trade(&conn, portfolio_id, statement_id, Some(trade_id))?;
        trade::get(&conn, portfolio_id, trade_id)
    }

    pub fn link_statement_to_trade(
        &self,
        portfolio_id: i64,
        statement_id: i64,
        trade_id: Option<i64>,
    ) -> Result<Statement> {
        let conn = self.conn.lock();
        if let Some(tid) = trade_id {
            if !trade::exists(&conn, portfolio_id, tid)? {
                return Err(crate::error::AppError::NotFound(format!(
                    "Trade {} not found",
                    tid
                )));
            }
        }
        statement::set_trade(&conn, portfolio_id, statement_id, trade_id)?;
        statement::get(&conn, portfolio_id, statement_id)
    }

    /// Underlying symbol of a statement's contract, for trade matching
    pub fn statement_underlying(&self, portfolio_id: i64, statement_id: i64) -> Result<Option<String>> {
        let conn = self.conn.lock();
        let stmt = statement::get(&conn, portfolio_id, statement_id)?;
        match stmt.contract_id {
            Some(cid) => Ok(Some(contract::underlying_symbol(&conn, cid)?)),
            None => Ok(None),
        }
    }

    // ========== Trades ==========

    pub fn get_trade(&self, portfolio_id: i64, trade_id: i64) -> Result<Trade> {
        let conn = self.conn.lock();
        trade::get(&conn, portfolio_id, trade_id)
    }

    pub fn trades_summary(
        &self,
        portfolio_id: i64,
        window: PeriodWindow,
        today: NaiveDate,
    ) -> Result<Vec<Trade>> {
        let conn = self.conn.lock();
        trade::list_for_window(&conn, portfolio_id, window.start(today))
    }

    pub fn find_open_trade(&self, portfolio_id: i64, symbol: &str) -> Result<Option<i64>> {
        let conn = self.conn.lock();
        trade::find_open_by_symbol(&conn, portfolio_id, symbol)
    }

    pub fn update_trade(
        &self,
        portfolio_id: i64,
        trade_id: i64,
        update: &TradeUpdate,
    ) -> Result<Trade> {
        let conn = self.conn.lock();
        trade::update(&conn, portfolio_id, trade_id, update)?;
        trade::get(&conn, portfolio_id, trade_id)
    }

    pub fn delete_trade(&self, portfolio_id: i64, trade_id: i64) -> Result<()> {
        let conn = self.conn.lock();
        trade::delete(&conn, portfolio_id, trade_id)
    }

    // ========== Positions ==========

    pub fn list_positions(&self, portfolio_id: i64) -> Result<Vec<Position>> {
        let conn = self.conn.lock();
        position::list(&conn, portfolio_id)
    }

    pub fn list_option_positions(&self, portfolio_id: i64) -> Result<Vec<Position>> {
        let conn = self.conn.lock();
        position::list_options(&conn, portfolio_id)
    }

    pub fn insert_position(&self, p: &Position) -> Result<i64> {
        let conn = self.conn.lock();
        position::insert(&conn, p)
    }

    // ========== Balances ==========

    pub fn list_balances(&self, portfolio_id: i64) -> Result<Vec<Balance>> {
        let conn = self.conn.lock();
        balance::list(&conn, portfolio_id)
    }

    pub fn get_balance(&self, portfolio_id: i64, balance_id: i64) -> Result<Balance> {
        let conn = self.conn.lock();
        balance::get(&conn, portfolio_id, balance_id)
    }

    pub fn insert_balance(&self, portfolio_id: i64, currency: &str, quantity: f64) -> Result<Balance> {
        let conn = self.conn.lock();
        balance::insert(&conn, portfolio_id, currency, quantity)
    }

    pub fn update_balance(
        &self,
        portfolio_id: i64,
        balance_id: i64,
        currency: &str,
        quantity: f64,
    ) -> Result<Balance> {
        let conn = self.conn.lock();
        balance::update(&conn, portfolio_id, balance_id, currency, quantity)
    }

    pub fn delete_balance(&self, portfolio_id: i64, balance_id: i64) -> Result<()> {
        let conn = self.conn.lock();
        balance::delete(&conn, portfolio_id, balance_id)
    }

    // ========== Settings ==========

    pub fn list_settings(&self, portfolio_id: i64) -> Result<Vec<Setting>> {
        let conn = self.conn.lock();
        setting::list(&conn, portfolio_id)
    }

    pub fn get_setting(&self, portfolio_id: i64, setting_id: i64) -> Result<Setting> {
        let conn = self.conn.lock();
        setting::get(&conn, portfolio_id, setting_id)
    }

    pub fn insert_setting(&self, portfolio_id: i64, values: &SettingValues) -> Result<Setting> {
        let conn = self.conn.lock();
        setting::insert(&conn, portfolio_id, values)
    }

    pub fn update_setting(
        &self,
        portfolio_id: i64,
        setting_id: i64,
        values: &SettingValues,
    ) -> Result<Setting> {
        let conn = self.conn.lock();
        setting::update(&conn, portfolio_id, setting_id, values)
    }

    pub fn delete_setting(&self, portfolio_id: i64, setting_id: i64) -> Result<()> {
        let conn = self.conn.lock();
        setting::delete(&conn, portfolio_id, setting_id)
    }

    // ========== Orders ==========

    pub fn list_orders(&self, portfolio_id: i64) -> Result<Vec<OpenOrder>> {
        let conn = self.conn.lock();
        order::list(&conn, portfolio_id)
    }

    pub fn insert_order(
        &self,
        portfolio_id: i64,
        contract_id: i64,
        action: &str,
        quantity: f64,
        limit_price: Option<f64>,
    ) -> Result<i64> {
        let conn = self.conn.lock();
        order::insert(&conn, portfolio_id, contract_id, action, quantity, limit_price)
    }

    pub fn delete_order(&self, portfolio_id: i64, order_id: i64) -> Result<()> {
        let conn = self.conn.lock();
        order::delete(&conn, portfolio_id, order_id)
    }

    // ========== Reports ==========

    pub fn report_rows(
        &self,
        portfolio_id: i64,
        window: PeriodWindow,
        today: NaiveDate,
    ) -> Result<Vec<ReportRow>> {
        let conn = self.conn.lock();
        summary::report_rows(&conn, portfolio_id, window.start(today))
    }

    pub fn tax_entries(&self, portfolio_id: i64, year: i32) -> Result<Vec<TaxEntry>> {
        let conn = self.conn.lock();
        statement::tax_entries(&conn, portfolio_id, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CashStrategy, ContractDetails, OptionSide, StatementKind, TradeStatus,
    };
    use tempfile::TempDir;

    fn open_db(dir: &TempDir) -> FolioDb {
        FolioDb::new(&dir.path().join("test.db")).unwrap()
    }

    fn test_portfolio() -> Portfolio {
        Portfolio {
            id: 0,
            name: "Main".to_string(),
            account: "U1234567".to_string(),
            base_currency: "EUR".to_string(),
            benchmark_symbol: Some("SPY".to_string()),
            cash_strategy: CashStrategy::Deposit,
            country: Some("DE".to_string()),
            settings: Vec::new(),
        }
    }

    fn stock_contract(symbol: &str) -> Contract {
        Contract {
            id: 0,
            symbol: symbol.to_string(),
            exchange: Some("SMART".to_string()),
            currency: "USD".to_string(),
            bid: Some(99.0),
            ask: Some(101.0),
            last: Some(100.5),
            previous_close: Some(98.0),
            price_updated_at: None,
            details: ContractDetails::Stock,
        }
    }

    fn put_contract(underlying_id: i64, underlying: &str, expiry: &str, strike: f64) -> Contract {
        Contract {
            id: 0,
            symbol: format!("{} {} P{}", underlying, expiry, strike),
            exchange: None,
            currency: "USD".to_string(),
            bid: None,
            ask: None,
            last: Some(1.2),
            previous_close: None,
            price_updated_at: None,
            details: ContractDetails::Option {
                underlying_id: Some(underlying_id),
                underlying_symbol: underlying.to_string(),
                expiry: expiry.parse().unwrap(),
                strike,
                side: OptionSide::Put,
                multiplier: 100.0,
                delta: Some(-0.3),
                underlying_price: None,
            },
        }
    }

    fn dividend(pid: i64, date: &str, amount: f64, fx: f64) -> Statement {
        Statement {
            id: 0,
            portfolio_id: pid,
            trade_id: None,
            contract_id: None,
            date: date.parse().unwrap(),
            currency: "USD".to_string(),
            amount,
            fx_rate: fx,
            description: "dividend".to_string(),
            kind: StatementKind::Dividend {
                country: Some("US".to_string()),
            },
        }
    }

    #[test]
    fn test_portfolio_round_trip_includes_settings() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let pid = db.insert_portfolio(&test_portfolio()).unwrap();
        db.insert_setting(
            pid,
            &SettingValues {
                symbol: "ACME".to_string(),
                nav_ratio: 0.1,
                csp_strategy: 1,
                cc_strategy: 0,
                csp_delta: 0.3,
                cc_delta: 0.2,
                roll_put_days: 7,
                roll_call_days: 5,
            },
        )
        .unwrap();

        let got = db.get_portfolio(pid).unwrap();
        assert_eq!(got.name, "Main");
        assert_eq!(got.settings.len(), 1);
        assert_eq!(got.settings[0].symbol, "ACME");

        let all = db.list_portfolios().unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].settings.is_empty());
    }

    #[test]
    fn test_contract_subtype_round_trip() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let uid = db.insert_contract(&stock_contract("ACME")).unwrap();
        let oid = db
            .insert_contract(&put_contract(uid, "ACME", "2026-09-18", 95.0))
            .unwrap();

        let got = db.get_contract(oid).unwrap();
        match got.details {
            ContractDetails::Option {
                underlying_id,
                strike,
                side,
                ..
            } => {
                assert_eq!(underlying_id, Some(uid));
                assert_eq!(strike, 95.0);
                assert_eq!(side, OptionSide::Put);
            }
            other => panic!("expected option details, got {:?}", other),
        }
    }

    #[test]
    fn test_quote_update_is_visible() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let cid = db.insert_contract(&stock_contract("ACME")).unwrap();
        db.update_contract_quotes(&[(cid, Some(110.0), Some(112.0), Some(111.0))])
            .unwrap();
        let got = db.get_contract(cid).unwrap();
        assert_eq!(got.bid, Some(110.0));
        assert!(got.price_updated_at.is_some());
    }

    #[test]
    fn test_quote_batch_with_unknown_id_rolls_back() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let cid = db.insert_contract(&stock_contract("ACME")).unwrap();
        let err = db.update_contract_quotes(&[
            (cid, Some(110.0), Some(112.0), Some(111.0)),
            (9999, None, None, None),
        ]);
        assert!(err.is_err());
        // The earlier update in the batch must not survive
        let got = db.get_contract(cid).unwrap();
        assert_eq!(got.bid, Some(99.0));
        assert!(got.price_updated_at.is_none());
    }

    #[test]
    fn test_statements_for_month_ordered() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let pid = db.insert_portfolio(&test_portfolio()).unwrap();
        db.insert_statement(&dividend(pid, "2026-02-20", 10.0, 1.0)).unwrap();
        db.insert_statement(&dividend(pid, "2026-02-03", 20.0, 1.0)).unwrap();
        db.insert_statement(&dividend(pid, "2026-03-01", 30.0, 1.0)).unwrap();

        let feb = db.statements_for_month(pid, 2026, 2).unwrap();
        assert_eq!(feb.len(), 2);
        assert_eq!(feb[0].amount, 20.0);
        assert_eq!(feb[1].amount, 10.0);
    }

    #[test]
    fn test_monthly_summary_windows() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let pid = db.insert_portfolio(&test_portfolio()).unwrap();
        db.insert_statement(&dividend(pid, "2025-06-15", 100.0, 1.0)).unwrap();
        db.insert_statement(&dividend(pid, "2026-02-15", 50.0, 2.0)).unwrap();

        let today: NaiveDate = "2026-08-30".parse().unwrap();
        let all = db
            .statements_summary(pid, PeriodWindow::AllTime, today)
            .unwrap();
        assert_eq!(all.count, 2);
        assert_eq!(all.total, 200.0);

        let ytd = db
            .statements_summary(pid, PeriodWindow::YearToDate, today)
            .unwrap();
        assert_eq!(ytd.count, 1);
        assert_eq!(ytd.total, 100.0);
        assert_eq!(ytd.months[0].month, 2);
    }

    #[test]
    fn test_trade_lifecycle() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let pid = db.insert_portfolio(&test_portfolio()).unwrap();
        let uid = db.insert_contract(&stock_contract("ACME")).unwrap();
        let oid = db
            .insert_contract(&put_contract(uid, "ACME", "2026-09-18", 95.0))
            .unwrap();
        let mut s = dividend(pid, "2026-08-01", 120.0, 1.0);
        s.contract_id = Some(oid);
        s.kind = StatementKind::OptionTrade {
            quantity: -1.0,
            price: Some(1.2),
            proceeds: Some(120.0),
            fees: Some(-1.0),
            realized_pnl: None,
        };
        let sid = db.insert_statement(&s).unwrap();

        // Underlying resolution goes through the option's underlying symbol
        assert_eq!(
            db.statement_underlying(pid, sid).unwrap().as_deref(),
            Some("ACME")
        );

        let trade = db
            .create_trade_for_statement(pid, sid, "ACME", TradeStrategy::CashSecuredPut)
            .unwrap();
        assert_eq!(trade.status, TradeStatus::Open);
        assert_eq!(trade.statements.len(), 1);
        assert_eq!(trade.pnl, 120.0);

        // Guessing finds the open trade by underlying
        assert_eq!(db.find_open_trade(pid, "ACME").unwrap(), Some(trade.id));

        let updated = db
            .update_trade(
                pid,
                trade.id,
                &TradeUpdate {
                    strategy: TradeStrategy::TheWheel,
                    status: TradeStatus::Closed,
                    closed_at: Some("2026-08-20".parse().unwrap()),
                    comment: Some("assigned".to_string()),
                    risk: Some(9500.0),
                },
            )
            .unwrap();
        assert_eq!(updated.strategy, TradeStrategy::TheWheel);
        assert_eq!(updated.status, TradeStatus::Closed);
        assert_eq!(db.find_open_trade(pid, "ACME").unwrap(), None);

        // Deleting unlinks the statement
        db.delete_trade(pid, trade.id).unwrap();
        let s = db.get_statement(pid, sid).unwrap();
        assert_eq!(s.trade_id, None);
    }

    #[test]
    fn test_option_positions_carry_underlying_price() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let pid = db.insert_portfolio(&test_portfolio()).unwrap();
        let uid = db.insert_contract(&stock_contract("ACME")).unwrap();
        let oid = db
            .insert_contract(&put_contract(uid, "ACME", "2026-09-18", 95.0))
            .unwrap();
        let put = db.get_contract(oid).unwrap();
        db.insert_position(&Position {
            id: 0,
            portfolio_id: pid,
            contract: put,
            quantity: -1.0,
            cost_basis: -120.0,
            base_rate: 0.9,
        })
        .unwrap();

        let options = db.list_option_positions(pid).unwrap();
        assert_eq!(options.len(), 1);
        match &options[0].contract.details {
            ContractDetails::Option {
                underlying_price, ..
            } => assert_eq!(*underlying_price, Some(100.0)), // (99 + 101) / 2
            other => panic!("expected option details, got {:?}", other),
        }

        // The plain index keeps all positions
        assert_eq!(db.list_positions(pid).unwrap().len(), 1);
    }

    #[test]
    fn test_report_rows_split_by_type() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let pid = db.insert_portfolio(&test_portfolio()).unwrap();
        db.insert_statement(&dividend(pid, "2026-03-10", 80.0, 1.0)).unwrap();
        let mut fee = dividend(pid, "2026-03-12", -5.0, 1.0);
        fee.kind = StatementKind::Fee;
        db.insert_statement(&fee).unwrap();
        let mut pnl = dividend(pid, "2026-03-15", 0.0, 1.0);
        pnl.kind = StatementKind::Equity {
            quantity: -100.0,
            price: Some(40.0),
            proceeds: Some(4000.0),
            fees: None,
            realized_pnl: Some(250.0),
        };
        db.insert_statement(&pnl).unwrap();

        let today: NaiveDate = "2026-08-30".parse().unwrap();
        let rows = db.report_rows(pid, PeriodWindow::AllTime, today).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].dividends, 80.0);
        assert_eq!(rows[0].fees, -5.0);
        assert_eq!(rows[0].realized_pnl, 250.0);
        assert_eq!(rows[0].total(), 325.0);
    }

    #[test]
    fn test_tax_entries_only_dividends_and_taxes() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let pid = db.insert_portfolio(&test_portfolio()).unwrap();
        db.insert_statement(&dividend(pid, "2026-01-10", 80.0, 1.0)).unwrap();
        let mut tax = dividend(pid, "2026-01-10", -12.0, 1.0);
        tax.kind = StatementKind::Tax {
            country: Some("US".to_string()),
        };
        db.insert_statement(&tax).unwrap();
        let mut interest = dividend(pid, "2026-01-11", 3.0, 1.0);
        interest.kind = StatementKind::Interest;
        db.insert_statement(&interest).unwrap();
        db.insert_statement(&dividend(pid, "2025-12-31", 70.0, 1.0)).unwrap();

        let entries = db.tax_entries(pid, 2026).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, "dividend");
        assert_eq!(entries[1].kind, "tax");
    }

    #[test]
    fn test_order_listing_carries_contract_symbol() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let pid = db.insert_portfolio(&test_portfolio()).unwrap();
        let cid = db.insert_contract(&stock_contract("ACME")).unwrap();
        let oid = db.insert_order(pid, cid, "BUY", 100.0, Some(98.5)).unwrap();

        let orders = db.list_orders(pid).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].symbol, "ACME");
        assert_eq!(orders[0].limit_price, Some(98.5));

        db.delete_order(pid, oid).unwrap();
        assert!(db.delete_order(pid, oid).is_err());
    }

    #[test]
    fn test_balance_crud() {
        let dir = TempDir::new().unwrap();
        let db = open_db(&dir);
        let pid = db.insert_portfolio(&test_portfolio()).unwrap();
        let b = db.insert_balance(pid, "USD", 1500.0).unwrap();
        db.update_balance(pid, b.id, "USD", 1800.0).unwrap();
        assert_eq!(db.get_balance(pid, b.id).unwrap().quantity, 1800.0);
        db.delete_balance(pid, b.id).unwrap();
        assert!(db.get_balance(pid, b.id).is_err());
    }
}
