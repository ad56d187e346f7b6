//! HTML views: pure functions from loaded data to markup
//!
//! Tabular pages go through the [`Table`] view model so that sorting,
//! subtotal and total rows are decided before any HTML exists. Rendering is
//! plain string templating; there is no client-side script anywhere.

pub mod balances;
pub mod format;
pub mod links;
pub mod orders;
pub mod portfolios;
pub mod positions;
pub mod reports;
pub mod settings;
pub mod statements;
pub mod trades;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - foliodesk</title>
<style>
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; margin: 1em 0; }
th, td { border: 1px solid #ccc; padding: 0.3em 0.7em; text-align: left; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
tr.subtotal td { border-top: 2px solid #888; font-style: italic; }
tr.total td { border-top: 3px double #333; font-weight: bold; }
.pos { color: #0a6b0a; }
.neg { color: #b00020; }
.itm { background: #fff3cd; }
nav a { margin-right: 1em; }
form.inline { display: inline; }
</style>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#;

/// Escape text for safe interpolation into HTML
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a body in the page shell
pub fn page(title: &str, body: &str) -> String {
    PAGE_TEMPLATE
        .replace("{title}", &escape(title))
        .replace("{body}", body)
}

/// Generic error page, the single rendering point of the page error boundary
pub fn error_page(status: u16, message: &str) -> String {
    let body = format!(
        "<p>{}</p><p><a href=\"/\">Back to portfolios</a></p>",
        escape(message)
    );
    page(&format!("Error {}", status), &body)
}

/// One table cell: already-escaped HTML plus an optional CSS class
#[derive(Debug, Clone)]
pub struct Cell {
    pub html: String,
    pub class: Option<&'static str>,
}

impl Cell {
    pub fn text(s: impl AsRef<str>) -> Self {
        Cell {
            html: escape(s.as_ref()),
            class: None,
        }
    }

    pub fn empty() -> Self {
        Cell {
            html: String::new(),
            class: None,
        }
    }

    /// Right-aligned numeric cell
    pub fn num(s: impl AsRef<str>) -> Self {
        Cell {
            html: escape(s.as_ref()),
            class: Some("num"),
        }
    }

    /// Numeric cell colored by sign
    pub fn signed(value: f64) -> Self {
        Cell {
            html: escape(&format::dec(value, 2)),
            class: Some(format::sign_class(value)),
        }
    }

    pub fn link(href: &str, label: &str) -> Self {
        Cell {
            html: format!("<a href=\"{}\">{}</a>", escape(href), escape(label)),
            class: None,
        }
    }

    /// Cell with markup built by the caller; the caller escapes
    pub fn raw(html: String) -> Self {
        Cell { html, class: None }
    }
}

/// One table row; subtotal and total rows get their own styling
#[derive(Debug, Clone)]
pub enum Row {
    Data(Vec<Cell>),
    Subtotal(Vec<Cell>),
    Total(Vec<Cell>),
}

/// Tabular view model: columns plus finished rows, ready to render
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<&'static str>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<table>\n<tr>");
        for col in &self.columns {
            html.push_str(&format!("<th>{}</th>", escape(col)));
        }
        html.push_str("</tr>\n");
        for row in &self.rows {
            let (cells, row_class) = match row {
                Row::Data(cells) => (cells, ""),
                Row::Subtotal(cells) => (cells, " class=\"subtotal\""),
                Row::Total(cells) => (cells, " class=\"total\""),
            };
            html.push_str(&format!("<tr{}>", row_class));
            for cell in cells {
                match cell.class {
                    Some(class) => {
                        html.push_str(&format!("<td class=\"{}\">{}</td>", class, cell.html))
                    }
                    None => html.push_str(&format!("<td>{}</td>", cell.html)),
                }
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>");
        html
    }
}

/// Window selector links shown above summary tables
pub fn window_nav(
    current: crate::models::PeriodWindow,
    path_for: impl Fn(crate::models::PeriodWindow) -> String,
) -> String {
    let mut html = String::from("<nav>");
    for w in crate::models::PeriodWindow::ALL {
        if w == current {
            html.push_str(&format!("<strong>{}</strong> ", escape(w.label())));
        } else {
            html.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape(&path_for(w)),
                escape(w.label())
            ));
        }
    }
    html.push_str("</nav>");
    html
}

/// A one-button POST form, for command and delete actions
pub fn action_button(action: &str, label: &str) -> String {
    format!(
        "<form class=\"inline\" method=\"post\" action=\"{}\"><button type=\"submit\">{}</button></form>",
        escape(action),
        escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
    }

    #[test]
    fn test_table_renders_row_classes() {
        let mut t = Table::new(vec!["A"]);
        t.rows.push(Row::Data(vec![Cell::text("x")]));
        t.rows.push(Row::Subtotal(vec![Cell::num("1.00")]));
        t.rows.push(Row::Total(vec![Cell::signed(-2.0)]));
        let html = t.render();
        assert!(html.contains("<tr class=\"subtotal\">"));
        assert!(html.contains("<tr class=\"total\">"));
        assert!(html.contains("class=\"neg\""));
    }
}
