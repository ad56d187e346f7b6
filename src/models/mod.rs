//! Entity types exchanged between the data layer, the JSON API and the pages
//!
//! Models are plain data structs; schema and row mapping live in `crate::db`,
//! and computed values (days to expiration, live-price averaging, average
//! price) are free functions over the structs.

pub mod contract;
pub mod order;
pub mod portfolio;
pub mod position;
pub mod statement;
pub mod summary;
pub mod trade;

pub use contract::{days_to_expiration, live_price, Contract, ContractDetails, OptionSide, SecurityType};
pub use order::OpenOrder;
pub use portfolio::{CashStrategy, Portfolio, Setting};
pub use position::{average_price, Balance, Position};
pub use statement::{Statement, StatementKind};
pub use summary::{MonthlyTotal, PeriodWindow, ReportRow, StatementsSummary, TaxEntry, YearReport};
pub use trade::{Trade, TradeStatus, TradeStrategy};
