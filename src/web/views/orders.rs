//! Open orders table with per-row cancel buttons

use crate::models::OpenOrder;
use crate::web::views::{action_button, format, links, Cell, Row, Table};

pub fn orders_table(portfolio_id: i64, orders: &[OpenOrder]) -> Table {
    let mut table = Table::new(vec![
        "Symbol",
        "Action",
        "Quantity",
        "Limit",
        "Status",
        "",
    ]);
    for o in orders {
        table.rows.push(Row::Data(vec![
            Cell::text(&o.symbol),
            Cell::text(&o.action),
            Cell::num(format::dec(o.quantity, 0)),
            Cell::num(format::opt_dec(o.limit_price, 2)),
            Cell::text(&o.status),
            Cell::raw(action_button(
                &format!("{}/{}/delete", links::orders(portfolio_id), o.id),
                "Delete",
            )),
        ]));
    }
    table
}
