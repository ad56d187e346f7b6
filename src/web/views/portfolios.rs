//! Portfolio list and dashboard

use crate::models::Portfolio;
use crate::web::views::{escape, links, Cell, Row, Table};

pub fn portfolio_list(portfolios: &[Portfolio]) -> Table {
    let mut table = Table::new(vec!["Name", "Account", "Base currency", "Cash strategy"]);
    for p in portfolios {
        table.rows.push(Row::Data(vec![
            Cell::link(&links::portfolio(p.id), &p.name),
            Cell::text(&p.account),
            Cell::text(&p.base_currency),
            Cell::text(p.cash_strategy.as_str()),
        ]));
    }
    table
}

pub fn dashboard(portfolio: &Portfolio) -> String {
    let pid = portfolio.id;
    let sections = [
        (links::statements(pid), "Statements"),
        (links::trades(pid), "Trades"),
        (links::positions(pid), "Positions"),
        (links::option_positions(pid), "Option positions"),
        (links::balances(pid), "Balances"),
        (links::settings(pid), "Settings"),
        (links::orders(pid), "Orders"),
        (links::reports(pid), "Reports"),
    ];
    let mut body = format!(
        "<p>Account {} &middot; base {}</p><nav>",
        escape(&portfolio.account),
        escape(&portfolio.base_currency)
    );
    for (href, label) in sections {
        body.push_str(&format!("<a href=\"{}\">{}</a>", escape(&href), label));
    }
    body.push_str("</nav>");
    body
}
