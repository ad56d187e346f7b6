//! Trade summary table and the trade edit page

use crate::models::{PeriodWindow, Trade, TradeStatus, TradeStrategy};
use crate::web::views::{
    action_button, escape, format, links, statements, window_nav, Cell, Row, Table,
};

pub fn summary_page(portfolio_id: i64, window: PeriodWindow, trades: &[Trade]) -> String {
    let nav = window_nav(window, |w| links::trades_window(portfolio_id, w));

    let mut table = Table::new(vec![
        "Symbol",
        "Strategy",
        "Status",
        "Opened",
        "Closed",
        "Risk",
        "P&L (base)",
    ]);
    let mut total = 0.0;
    for t in trades {
        total += t.pnl;
        table.rows.push(Row::Data(vec![
            Cell::link(&links::trade(portfolio_id, t.id), &t.symbol),
            Cell::text(t.strategy.label()),
            Cell::text(t.status.as_str()),
            Cell::text(format!("{}", t.opened_at)),
            Cell::text(t.closed_at.map(|d| d.to_string()).unwrap_or_default()),
            Cell::num(format::opt_dec(t.risk, 2)),
            Cell::signed(t.pnl),
        ]));
    }
    table.rows.push(Row::Total(vec![
        Cell::text("Total"),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::signed(total),
    ]));

    format!("{}\n{}", nav, table.render())
}

fn strategy_select(current: TradeStrategy) -> String {
    let mut html = String::from("<select name=\"strategy\">");
    for s in TradeStrategy::ALL {
        let selected = if s == current { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            i32::from(s),
            selected,
            escape(s.label())
        ));
    }
    html.push_str("</select>");
    html
}

fn status_select(current: TradeStatus) -> String {
    let mut html = String::from("<select name=\"status\">");
    for s in [TradeStatus::Open, TradeStatus::Closed] {
        let selected = if s == current { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>",
            s.as_str(),
            selected
        ));
    }
    html.push_str("</select>");
    html
}

/// Trade detail: edit form, delete button and the linked statements
pub fn trade_page(portfolio_id: i64, trade: &Trade) -> String {
    let base = links::trade(portfolio_id, trade.id);
    let mut body = format!(
        "<p>{} &middot; {} &middot; P&amp;L <span class=\"{}\">{}</span></p>",
        escape(&trade.symbol),
        escape(trade.strategy.label()),
        format::sign_class(trade.pnl),
        format::dec(trade.pnl, 2),
    );

    body.push_str(&format!(
        "<form method=\"post\" action=\"{}/save\">\
         <label>Strategy {}</label> \
         <label>Status {}</label> \
         <label>Closed <input name=\"closed_at\" value=\"{}\" placeholder=\"YYYY-MM-DD\"></label> \
         <label>Risk <input name=\"risk\" value=\"{}\"></label> \
         <label>Comment <input name=\"comment\" value=\"{}\"></label> \
         <button type=\"submit\">Save</button></form>",
        escape(&base),
        strategy_select(trade.strategy),
        status_select(trade.status),
        trade.closed_at.map(|d| d.to_string()).unwrap_or_default(),
        format::opt_dec(trade.risk, 2),
        escape(trade.comment.as_deref().unwrap_or("")),
    ));
    body.push_str(&action_button(&format!("{}/delete", base), "Delete trade"));

    body.push_str("<h2>Statements</h2>");
    body.push_str(&statements::month_table(portfolio_id, &trade.statements).render());
    body
}
