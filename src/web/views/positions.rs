//! Position tables, including the option positions view with per-expiration
//! subtotals

use crate::models::{average_price, ContractDetails, OptionSide, Position};
use crate::web::views::{format, Cell, Row, Table};
use chrono::NaiveDate;

pub fn positions_table(positions: &[Position]) -> Table {
    let mut table = Table::new(vec![
        "Symbol",
        "Type",
        "Quantity",
        "Avg price",
        "Cost basis",
        "Cost (base)",
    ]);
    let mut total_base = 0.0;
    for p in positions {
        total_base += p.cost_basis * p.base_rate;
        table.rows.push(Row::Data(vec![
            Cell::text(&p.contract.symbol),
            Cell::text(p.contract.security_type().as_str()),
            Cell::num(format::dec(p.quantity, 0)),
            Cell::num(format::opt_dec(average_price(p), 2)),
            Cell::num(format::dec(p.cost_basis, 2)),
            Cell::num(format::dec(p.cost_basis * p.base_rate, 2)),
        ]));
    }
    table.rows.push(Row::Total(vec![
        Cell::text("Total"),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::num(format::dec(total_base, 2)),
    ]));
    table
}

struct OptionRow<'a> {
    position: &'a Position,
    symbol: &'a str,
    expiry: NaiveDate,
    strike: f64,
    side: OptionSide,
    underlying_price: Option<f64>,
}

/// In-the-money test with put/call polarity; unknown without a live price
fn in_the_money(side: OptionSide, strike: f64, underlying_price: Option<f64>) -> Option<bool> {
    let price = underlying_price?;
    Some(match side {
        OptionSide::Put => strike > price,
        OptionSide::Call => strike < price,
    })
}

fn itm_cell(row: &OptionRow<'_>) -> Cell {
    match in_the_money(row.side, row.strike, row.underlying_price) {
        Some(true) => Cell {
            html: "ITM".to_string(),
            class: Some("itm"),
        },
        Some(false) => Cell::text("OTM"),
        // No live price: leave the cell blank rather than guessing
        None => Cell::empty(),
    }
}

fn subtotal_row(expiry: NaiveDate, units: f64, base_total: f64) -> Row {
    Row::Subtotal(vec![
        Cell::text(format!("{}", expiry)),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::num(format::dec(units, 0)),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::num(format::dec(base_total, 2)),
    ])
}

/// Option positions sorted by expiration, symbol, strike, with a subtotal
/// row per expiration date and a grand total. Units count contracts
/// regardless of direction; money columns sum in base currency with missing
/// values as zero.
pub fn option_positions_table(positions: &[Position], today: NaiveDate) -> Table {
    let mut rows: Vec<OptionRow<'_>> = positions
        .iter()
        .filter_map(|p| match &p.contract.details {
            ContractDetails::Option {
                underlying_symbol,
                expiry,
                strike,
                side,
                underlying_price,
                ..
            } => Some(OptionRow {
                position: p,
                symbol: underlying_symbol,
                expiry: *expiry,
                strike: *strike,
                side: *side,
                underlying_price: *underlying_price,
            }),
            _ => None,
        })
        .collect();
    // Stable: equal keys keep their loaded order
    rows.sort_by(|a, b| {
        (a.expiry, a.symbol, a.strike)
            .partial_cmp(&(b.expiry, b.symbol, b.strike))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut table = Table::new(vec![
        "Symbol",
        "Expiry",
        "DTE",
        "Strike",
        "Side",
        "Quantity",
        "Avg price",
        "Underlying",
        "ITM",
        "Cost (base)",
    ]);

    let mut group: Option<NaiveDate> = None;
    let mut group_units = 0.0;
    let mut group_base = 0.0;
    let mut total_units = 0.0;
    let mut total_base = 0.0;

    for row in &rows {
        if let Some(expiry) = group {
            if expiry != row.expiry {
                table.rows.push(subtotal_row(expiry, group_units, group_base));
                group_units = 0.0;
                group_base = 0.0;
            }
        }
        group = Some(row.expiry);

        let base_cost = row.position.cost_basis * row.position.base_rate;
        group_units += row.position.quantity.abs();
        group_base += base_cost;
        total_units += row.position.quantity.abs();
        total_base += base_cost;

        table.rows.push(Row::Data(vec![
            Cell::text(row.symbol),
            Cell::text(format!("{}", row.expiry)),
            Cell::num(format!(
                "{}",
                crate::models::days_to_expiration(row.expiry, today)
            )),
            Cell::num(format::dec(row.strike, 2)),
            Cell::text(row.side.as_str()),
            Cell::num(format::dec(row.position.quantity, 0)),
            Cell::num(format::opt_dec(average_price(row.position), 2)),
            Cell::num(format::opt_dec(row.underlying_price, 2)),
            itm_cell(row),
            Cell::num(format::dec(base_cost, 2)),
        ]));
    }
    if let Some(expiry) = group {
        table.rows.push(subtotal_row(expiry, group_units, group_base));
    }

    table.rows.push(Row::Total(vec![
        Cell::text("Total"),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::num(format::dec(total_units, 0)),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::num(format::dec(total_base, 2)),
    ]));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contract;

    fn option_position(
        symbol: &str,
        expiry: &str,
        strike: f64,
        side: OptionSide,
        quantity: f64,
        cost_basis: f64,
        underlying_price: Option<f64>,
    ) -> Position {
        Position {
            id: 0,
            portfolio_id: 1,
            contract: Contract {
                id: 0,
                symbol: format!("{} {} {:?}{}", symbol, expiry, side, strike),
                exchange: None,
                currency: "USD".to_string(),
                bid: None,
                ask: None,
                last: None,
                previous_close: None,
                price_updated_at: None,
                details: ContractDetails::Option {
                    underlying_id: None,
                    underlying_symbol: symbol.to_string(),
                    expiry: expiry.parse().unwrap(),
                    strike,
                    side,
                    multiplier: 100.0,
                    delta: None,
                    underlying_price,
                },
            },
            quantity,
            cost_basis,
            base_rate: 1.0,
        }
    }

    #[test]
    fn test_in_the_money_polarity() {
        assert_eq!(in_the_money(OptionSide::Put, 100.0, Some(95.0)), Some(true));
        assert_eq!(in_the_money(OptionSide::Put, 100.0, Some(105.0)), Some(false));
        assert_eq!(in_the_money(OptionSide::Call, 100.0, Some(105.0)), Some(true));
        assert_eq!(in_the_money(OptionSide::Call, 100.0, Some(95.0)), Some(false));
        assert_eq!(in_the_money(OptionSide::Call, 100.0, None), None);
    }

    #[test]
    fn test_subtotals_per_expiry_and_grand_total() {
        let today: NaiveDate = "2026-08-30".parse().unwrap();
        // Out of order on purpose; the view must sort
        let positions = vec![
            option_position("ZETA", "2026-10-16", 50.0, OptionSide::Call, -2.0, 300.0, Some(55.0)),
            option_position("ACME", "2026-09-18", 95.0, OptionSide::Put, -1.0, -120.0, Some(100.0)),
            option_position("ACME", "2026-09-18", 90.0, OptionSide::Put, -1.0, -80.0, Some(100.0)),
        ];
        let table = option_positions_table(&positions, today);

        // 3 data rows, 2 subtotals, 1 total
        assert_eq!(table.rows.len(), 6);
        let kinds: Vec<&str> = table
            .rows
            .iter()
            .map(|r| match r {
                Row::Data(_) => "data",
                Row::Subtotal(_) => "subtotal",
                Row::Total(_) => "total",
            })
            .collect();
        assert_eq!(kinds, vec!["data", "data", "subtotal", "data", "subtotal", "total"]);

        // Sorted: strike 90 before 95 within the earlier expiry
        if let Row::Data(cells) = &table.rows[0] {
            assert_eq!(cells[3].html, "90.00");
        } else {
            panic!("expected data row first");
        }

        // Grand total: units 4, base cost sum 100.00
        if let Row::Total(cells) = &table.rows[5] {
            assert_eq!(cells[5].html, "4");
            assert_eq!(cells[9].html, "100.00");
        } else {
            panic!("expected total row last");
        }
    }

    #[test]
    fn test_equal_sort_keys_keep_input_order() {
        let today: NaiveDate = "2026-08-30".parse().unwrap();
        // Two lots of the same contract: identical expiry, symbol and strike
        let positions = vec![
            option_position("ACME", "2026-09-18", 95.0, OptionSide::Put, -1.0, -120.0, Some(100.0)),
            option_position("ACME", "2026-09-18", 95.0, OptionSide::Put, -3.0, -360.0, Some(100.0)),
        ];
        let table = option_positions_table(&positions, today);

        let quantities: Vec<&str> = table
            .rows
            .iter()
            .filter_map(|r| match r {
                Row::Data(cells) => Some(cells[5].html.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(quantities, vec!["-1", "-3"]);
    }

    #[test]
    fn test_missing_underlying_price_renders_blank() {
        let today: NaiveDate = "2026-08-30".parse().unwrap();
        let positions = vec![option_position(
            "ACME", "2026-09-18", 95.0, OptionSide::Put, -1.0, -120.0, None,
        )];
        let table = option_positions_table(&positions, today);
        if let Row::Data(cells) = &table.rows[0] {
            assert_eq!(cells[7].html, "");
            assert_eq!(cells[8].html, "");
        } else {
            panic!("expected data row");
        }
    }
}
