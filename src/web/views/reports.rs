//! Performance report and yearly tax report tables

use crate::models::{ReportRow, TaxEntry, YearReport};
use crate::web::views::{format, Cell, Row, Table};

pub fn report_table(rows: &[ReportRow]) -> Table {
    let mut table = Table::new(vec![
        "Month",
        "Dividends",
        "Interest",
        "Fees",
        "Taxes",
        "Realized P&L",
        "Total",
    ]);
    let mut dividends = 0.0;
    let mut interest = 0.0;
    let mut fees = 0.0;
    let mut taxes = 0.0;
    let mut realized = 0.0;
    for row in rows {
        dividends += row.dividends;
        interest += row.interest;
        fees += row.fees;
        taxes += row.taxes;
        realized += row.realized_pnl;
        table.rows.push(Row::Data(vec![
            Cell::text(format!("{} {}", format::month_name(row.month), row.year)),
            Cell::num(format::dec(row.dividends, 2)),
            Cell::num(format::dec(row.interest, 2)),
            Cell::num(format::dec(row.fees, 2)),
            Cell::num(format::dec(row.taxes, 2)),
            Cell::signed(row.realized_pnl),
            Cell::signed(row.total()),
        ]));
    }
    table.rows.push(Row::Total(vec![
        Cell::text("Total"),
        Cell::num(format::dec(dividends, 2)),
        Cell::num(format::dec(interest, 2)),
        Cell::num(format::dec(fees, 2)),
        Cell::num(format::dec(taxes, 2)),
        Cell::signed(realized),
        Cell::signed(dividends + interest + fees + taxes + realized),
    ]));
    table
}

fn country_label(country: &Option<String>) -> String {
    country.clone().unwrap_or_else(|| "unknown".to_string())
}

fn group_subtotal(label: String, base_total: f64) -> Row {
    Row::Subtotal(vec![
        Cell::text(label),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::num(format::dec(base_total, 2)),
    ])
}

/// Tax report entries grouped by country, then month, with a subtotal per
/// month, a subtotal per country and a grand total. All subtotals are base
/// currency amounts.
pub fn tax_report_table(report: &YearReport) -> Table {
    let mut entries: Vec<&TaxEntry> = report.entries.iter().collect();
    entries.sort_by(|a, b| {
        (country_label(&a.country), a.date).cmp(&(country_label(&b.country), b.date))
    });

    let mut table = Table::new(vec!["Date", "Description", "Type", "Amount", "Amount (base)"]);

    let mut group: Option<(String, u32)> = None;
    let mut month_total = 0.0;
    let mut country_total = 0.0;
    let mut grand_total = 0.0;

    for entry in &entries {
        use chrono::Datelike;
        let key = (country_label(&entry.country), entry.date.month());
        if let Some((country, month)) = &group {
            if key.0 != *country || key.1 != *month {
                table
                    .rows
                    .push(group_subtotal(format!("{} {}", country, format::month_name(*month)), month_total));
                month_total = 0.0;
            }
            if key.0 != *country {
                table.rows.push(group_subtotal(country.clone(), country_total));
                country_total = 0.0;
            }
        }
        group = Some(key);

        let base = entry.amount * entry.fx_rate;
        month_total += base;
        country_total += base;
        grand_total += base;

        table.rows.push(Row::Data(vec![
            Cell::text(format!("{}", entry.date)),
            Cell::text(&entry.description),
            Cell::text(&entry.kind),
            Cell::num(format::dec(entry.amount, 2)),
            Cell::signed(base),
        ]));
    }
    if let Some((country, month)) = group {
        table
            .rows
            .push(group_subtotal(format!("{} {}", country, format::month_name(month)), month_total));
        table.rows.push(group_subtotal(country, country_total));
    }

    table.rows.push(Row::Total(vec![
        Cell::text("Total"),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::signed(grand_total),
    ]));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(date: &str, country: Option<&str>, kind: &str, amount: f64) -> TaxEntry {
        TaxEntry {
            date: date.parse::<NaiveDate>().unwrap(),
            country: country.map(|c| c.to_string()),
            description: format!("{} entry", kind),
            kind: kind.to_string(),
            amount,
            fx_rate: 1.0,
        }
    }

    #[test]
    fn test_report_total_row_sums_columns() {
        let rows = vec![
            ReportRow {
                year: 2026,
                month: 1,
                dividends: 100.0,
                interest: 5.0,
                fees: -3.0,
                taxes: -15.0,
                realized_pnl: 40.0,
            },
            ReportRow {
                year: 2026,
                month: 2,
                dividends: 50.0,
                interest: 0.0,
                fees: 0.0,
                taxes: -7.5,
                realized_pnl: -10.0,
            },
        ];
        let table = report_table(&rows);
        assert_eq!(table.rows.len(), 3);
        if let Row::Total(cells) = &table.rows[2] {
            assert_eq!(cells[1].html, "150.00");
            assert_eq!(cells[4].html, "-22.50");
            assert_eq!(cells[6].html, "159.50");
        } else {
            panic!("expected total row");
        }
    }

    #[test]
    fn test_tax_report_groups_country_then_month() {
        let report = YearReport {
            year: 2026,
            entries: vec![
                entry("2026-02-10", Some("US"), "dividend", 80.0),
                entry("2026-01-05", Some("DE"), "dividend", 60.0),
                entry("2026-01-05", Some("DE"), "tax", -9.0),
                entry("2026-01-20", Some("US"), "dividend", 40.0),
            ],
        };
        let table = tax_report_table(&report);
        let kinds: Vec<&str> = table
            .rows
            .iter()
            .map(|r| match r {
                Row::Data(_) => "data",
                Row::Subtotal(_) => "subtotal",
                Row::Total(_) => "total",
            })
            .collect();
        // DE/Jan (2 rows) + month & country subtotal, then US Jan, US Feb
        // with their month subtotals and the US country subtotal
        assert_eq!(
            kinds,
            vec![
                "data", "data", "subtotal", "subtotal", "data", "subtotal", "data", "subtotal",
                "subtotal", "total"
            ]
        );
        if let Row::Total(cells) = table.rows.last().unwrap() {
            assert_eq!(cells[4].html, "171.00");
        } else {
            panic!("expected total row last");
        }
    }
}
