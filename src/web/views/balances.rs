//! Cash balance list and edit form

use crate::models::Balance;
use crate::web::views::{action_button, escape, format, links, Cell, Row, Table};

pub fn balances_table(portfolio_id: i64, balances: &[Balance]) -> Table {
    let mut table = Table::new(vec!["Currency", "Quantity"]);
    for b in balances {
        table.rows.push(Row::Data(vec![
            Cell::link(&links::balance(portfolio_id, b.id), &b.currency),
            Cell::num(format::dec(b.quantity, 2)),
        ]));
    }
    table
}

pub fn balance_page(portfolio_id: i64, balance: &Balance) -> String {
    let base = links::balance(portfolio_id, balance.id);
    let mut body = format!(
        "<form method=\"post\" action=\"{}/save\">\
         <label>Currency <input name=\"currency\" value=\"{}\"></label> \
         <label>Quantity <input name=\"quantity\" value=\"{}\"></label> \
         <button type=\"submit\">Save</button></form>",
        escape(&base),
        escape(&balance.currency),
        format::dec(balance.quantity, 2),
    );
    body.push_str(&action_button(&format!("{}/delete", base), "Delete balance"));
    body
}
