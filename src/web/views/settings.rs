//! Strategy settings list, create form and edit form

use crate::models::Setting;
use crate::web::views::{action_button, escape, format, links, Cell, Row, Table};

pub fn settings_table(portfolio_id: i64, settings: &[Setting]) -> Table {
    let mut table = Table::new(vec![
        "Symbol",
        "NAV ratio",
        "CSP",
        "CC",
        "CSP delta",
        "CC delta",
        "Roll put (d)",
        "Roll call (d)",
    ]);
    for s in settings {
        table.rows.push(Row::Data(vec![
            Cell::link(&links::setting(portfolio_id, s.id), &s.symbol),
            Cell::num(format::percent(s.nav_ratio)),
            Cell::num(format!("{}", s.csp_strategy)),
            Cell::num(format!("{}", s.cc_strategy)),
            Cell::num(format::dec(s.csp_delta, 2)),
            Cell::num(format::dec(s.cc_delta, 2)),
            Cell::num(format!("{}", s.roll_put_days)),
            Cell::num(format!("{}", s.roll_call_days)),
        ]));
    }
    table
}

fn fields(s: Option<&Setting>) -> String {
    format!(
        "<label>Symbol <input name=\"symbol\" value=\"{}\"></label> \
         <label>NAV ratio <input name=\"nav_ratio\" value=\"{}\"></label> \
         <label>CSP strategy <input name=\"csp_strategy\" value=\"{}\"></label> \
         <label>CC strategy <input name=\"cc_strategy\" value=\"{}\"></label> \
         <label>CSP delta <input name=\"csp_delta\" value=\"{}\"></label> \
         <label>CC delta <input name=\"cc_delta\" value=\"{}\"></label> \
         <label>Roll put days <input name=\"roll_put_days\" value=\"{}\"></label> \
         <label>Roll call days <input name=\"roll_call_days\" value=\"{}\"></label>",
        escape(s.map(|s| s.symbol.as_str()).unwrap_or("")),
        s.map(|s| format::dec(s.nav_ratio, 3)).unwrap_or_default(),
        s.map(|s| s.csp_strategy.to_string()).unwrap_or_default(),
        s.map(|s| s.cc_strategy.to_string()).unwrap_or_default(),
        s.map(|s| format::dec(s.csp_delta, 2)).unwrap_or_default(),
        s.map(|s| format::dec(s.cc_delta, 2)).unwrap_or_default(),
        s.map(|s| s.roll_put_days.to_string()).unwrap_or_default(),
        s.map(|s| s.roll_call_days.to_string()).unwrap_or_default(),
    )
}

pub fn create_form(portfolio_id: i64) -> String {
    format!(
        "<h2>New setting</h2><form method=\"post\" action=\"{}/create\">{} <button type=\"submit\">Create</button></form>",
        escape(&links::settings(portfolio_id)),
        fields(None)
    )
}

pub fn setting_page(portfolio_id: i64, setting: &Setting) -> String {
    let base = links::setting(portfolio_id, setting.id);
    let mut body = format!(
        "<form method=\"post\" action=\"{}/save\">{} <button type=\"submit\">Save</button></form>",
        escape(&base),
        fields(Some(setting))
    );
    body.push_str(&action_button(&format!("{}/delete", base), "Delete setting"));
    body
}
