//! Statement summary, month and detail views

use crate::models::{PeriodWindow, Statement, StatementsSummary};
use crate::web::views::{action_button, escape, format, links, window_nav, Cell, Row, Table};

pub fn summary_page(portfolio_id: i64, window: PeriodWindow, summary: &StatementsSummary) -> String {
    let nav = window_nav(window, |w| links::statements_window(portfolio_id, w));

    let mut table = Table::new(vec!["Month", "Entries", "Total (base)"]);
    for month in &summary.months {
        table.rows.push(Row::Data(vec![
            Cell::link(
                &links::statements_month(portfolio_id, month.year, month.month),
                &format!("{} {}", format::month_name(month.month), month.year),
            ),
            Cell::num(format!("{}", month.count)),
            Cell::signed(month.total),
        ]));
    }
    table.rows.push(Row::Total(vec![
        Cell::text("Total"),
        Cell::num(format!("{}", summary.count)),
        Cell::signed(summary.total),
    ]));

    format!("{}\n{}", nav, table.render())
}

pub fn month_table(portfolio_id: i64, entries: &[Statement]) -> Table {
    let mut table = Table::new(vec![
        "Date",
        "Type",
        "Description",
        "Amount",
        "Currency",
        "Amount (base)",
        "Trade",
    ]);
    let mut total = 0.0;
    for s in entries {
        total += s.base_amount();
        let trade_cell = match s.trade_id {
            Some(tid) => Cell::link(&links::trade(portfolio_id, tid), &format!("#{}", tid)),
            None => Cell::empty(),
        };
        table.rows.push(Row::Data(vec![
            Cell::link(&links::statement(portfolio_id, s.id), &format!("{}", s.date)),
            Cell::text(s.kind.type_name()),
            Cell::text(&s.description),
            Cell::num(format::dec(s.amount, 2)),
            Cell::text(&s.currency),
            Cell::signed(s.base_amount()),
            trade_cell,
        ]));
    }
    table.rows.push(Row::Total(vec![
        Cell::text("Total"),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::signed(total),
        Cell::empty(),
    ]));
    table
}

/// Statement detail with the four trade-link command forms
pub fn statement_page(portfolio_id: i64, statement: &Statement) -> String {
    let mut body = format!(
        "<dl>\
         <dt>Date</dt><dd>{}</dd>\
         <dt>Type</dt><dd>{}</dd>\
         <dt>Description</dt><dd>{}</dd>\
         <dt>Amount</dt><dd>{} {}</dd>\
         <dt>Amount (base)</dt><dd>{}</dd>\
         </dl>",
        statement.date,
        escape(statement.kind.type_name()),
        escape(&statement.description),
        format::dec(statement.amount, 2),
        escape(&statement.currency),
        format::dec(statement.base_amount(), 2),
    );

    let base = links::statement(portfolio_id, statement.id);
    match statement.trade_id {
        Some(tid) => {
            body.push_str(&format!(
                "<p>Linked to trade <a href=\"{}\">#{}</a></p>",
                escape(&links::trade(portfolio_id, tid)),
                tid
            ));
            body.push_str(&action_button(&format!("{}/unlink-trade", base), "Unlink trade"));
        }
        None => {
            body.push_str("<p>Not linked to a trade</p>");
            body.push_str(&action_button(&format!("{}/create-trade", base), "Create trade"));
            body.push_str(&action_button(&format!("{}/guess-trade", base), "Guess trade"));
            body.push_str(&format!(
                "<form class=\"inline\" method=\"post\" action=\"{}/add-to-trade\">\
                 <input name=\"trade_id\" size=\"6\" placeholder=\"trade id\">\
                 <button type=\"submit\">Add to trade</button></form>",
                escape(&base)
            ));
        }
    }
    body
}
