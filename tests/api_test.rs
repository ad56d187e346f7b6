//! End-to-end tests: boot the server on an ephemeral port, seed the database
//! through the state handle, then exercise the JSON API via the client
//! loaders and the page surface via plain HTTP.

use std::sync::Arc;

use chrono::{Datelike, Days, Utc};
use foliodesk::client::{self, ApiClient};
use foliodesk::config::Config;
use foliodesk::error::AppError;
use foliodesk::models::{
    CashStrategy, Contract, ContractDetails, OptionSide, PeriodWindow, Portfolio, Position,
    Statement, StatementKind, TradeStatus, TradeStrategy,
};
use foliodesk::server::Server;
use foliodesk::state::AppState;
use tempfile::TempDir;

struct TestServer {
    state: Arc<AppState>,
    api: ApiClient,
    base: String,
    _dir: TempDir,
}

async fn boot() -> TestServer {
    let dir = TempDir::new().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db"),
        api_base_url: None,
    };
    let server = Server::bind(config).await.unwrap();
    let addr = server.local_addr().unwrap();
    let state = server.state();
    tokio::spawn(server.serve());

    let base = format!("http://{}", addr);
    let api = ApiClient::new(base.clone()).unwrap();
    TestServer {
        state,
        api,
        base,
        _dir: dir,
    }
}

fn seed_portfolio(state: &AppState) -> i64 {
    state
        .db
        .insert_portfolio(&Portfolio {
            id: 0,
            name: "Main".to_string(),
            account: "U1234567".to_string(),
            base_currency: "EUR".to_string(),
            benchmark_symbol: None,
            cash_strategy: CashStrategy::Deposit,
            country: Some("DE".to_string()),
            settings: Vec::new(),
        })
        .unwrap()
}

fn stock(symbol: &str) -> Contract {
    Contract {
        id: 0,
        symbol: symbol.to_string(),
        exchange: None,
        currency: "USD".to_string(),
        bid: Some(99.0),
        ask: Some(101.0),
        last: Some(100.5),
        previous_close: None,
        price_updated_at: None,
        details: ContractDetails::Stock,
    }
}

fn put(underlying_id: i64, underlying: &str, expiry: &str, strike: f64) -> Contract {
    Contract {
        id: 0,
        symbol: format!("{} {} P{}", underlying, expiry, strike),
        exchange: None,
        currency: "USD".to_string(),
        bid: None,
        ask: None,
        last: Some(1.2),
        previous_close: None,
        price_updated_at: None,
        details: ContractDetails::Option {
            underlying_id: Some(underlying_id),
            underlying_symbol: underlying.to_string(),
            expiry: expiry.parse().unwrap(),
            strike,
            side: OptionSide::Put,
            multiplier: 100.0,
            delta: None,
            underlying_price: None,
        },
    }
}

fn dividend(portfolio_id: i64, date: chrono::NaiveDate, amount: f64) -> Statement {
    Statement {
        id: 0,
        portfolio_id,
        trade_id: None,
        contract_id: None,
        date,
        currency: "USD".to_string(),
        amount,
        fx_rate: 1.0,
        description: "dividend".to_string(),
        kind: StatementKind::Dividend {
            country: Some("US".to_string()),
        },
    }
}

#[tokio::test]
async fn portfolio_loaders_see_seeded_data() {
    let t = boot().await;
    let pid = seed_portfolio(&t.state);

    let portfolios = client::portfolios::fetch_portfolios(&t.api).await.unwrap();
    assert_eq!(portfolios.len(), 1);
    assert_eq!(portfolios[0].name, "Main");

    let portfolio = client::portfolios::fetch_portfolio(&t.api, pid).await.unwrap();
    assert_eq!(portfolio.base_currency, "EUR");
}

#[tokio::test]
async fn month_loader_returns_entries_in_date_order() {
    let t = boot().await;
    let pid = seed_portfolio(&t.state);
    let d20 = "2026-02-20".parse().unwrap();
    let d03 = "2026-02-03".parse().unwrap();
    t.state.db.insert_statement(&dividend(pid, d20, 10.0)).unwrap();
    t.state.db.insert_statement(&dividend(pid, d03, 20.0)).unwrap();

    let entries = client::statements::fetch_month(&t.api, pid, 2026, 2).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, d03);
    assert_eq!(entries[1].date, d20);
}

#[tokio::test]
async fn summary_windows_filter_old_entries() {
    let t = boot().await;
    let pid = seed_portfolio(&t.state);
    let today = Utc::now().date_naive();
    // 400 days back is always outside both ytd and the trailing year
    let old = today.checked_sub_days(Days::new(400)).unwrap();
    t.state.db.insert_statement(&dividend(pid, today, 50.0)).unwrap();
    t.state.db.insert_statement(&dividend(pid, old, 100.0)).unwrap();

    let all = client::statements::fetch_summary(&t.api, pid, PeriodWindow::AllTime)
        .await
        .unwrap();
    assert_eq!(all.count, 2);
    assert_eq!(all.total, 150.0);

    let ytd = client::statements::fetch_summary(&t.api, pid, PeriodWindow::YearToDate)
        .await
        .unwrap();
    assert_eq!(ytd.count, 1);
    assert_eq!(ytd.total, 50.0);

    let trailing = client::statements::fetch_summary(&t.api, pid, PeriodWindow::TrailingYear)
        .await
        .unwrap();
    assert_eq!(trailing.count, 1);
}

#[tokio::test]
async fn unknown_ids_surface_as_api_errors_not_parse_errors() {
    let t = boot().await;
    let pid = seed_portfolio(&t.state);

    let err = client::statements::fetch_statement(&t.api, pid, 9999)
        .await
        .unwrap_err();
    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("9999"), "message was: {}", message);
        }
        other => panic!("expected Api error, got {:?}", other),
    }

    // Unknown summary window is its own missing endpoint
    let resp = reqwest::get(format!("{}/api/portfolio/{}/statements/summary/6w", t.base, pid))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn trade_lifecycle_through_commands() {
    let t = boot().await;
    let pid = seed_portfolio(&t.state);
    let uid = t.state.db.insert_contract(&stock("ACME")).unwrap();
    let oid = t
        .state
        .db
        .insert_contract(&put(uid, "ACME", "2026-09-18", 95.0))
        .unwrap();

    let mut s = dividend(pid, "2026-08-01".parse().unwrap(), 120.0);
    s.contract_id = Some(oid);
    s.kind = StatementKind::OptionTrade {
        quantity: -1.0,
        price: Some(1.2),
        proceeds: Some(120.0),
        fees: Some(-1.0),
        realized_pnl: None,
    };
    let sid = t.state.db.insert_statement(&s).unwrap();

    // A sold put opens a cash secured put trade
    let trade = client::statements::create_trade(&t.api, pid, sid).await.unwrap();
    assert_eq!(trade.symbol, "ACME");
    assert_eq!(trade.strategy, TradeStrategy::CashSecuredPut);
    assert_eq!(trade.status, TradeStatus::Open);
    assert_eq!(trade.statements.len(), 1);

    // Unlink, then guess finds the same open trade again
    let unlinked = client::statements::unlink_trade(&t.api, pid, sid).await.unwrap();
    assert_eq!(unlinked.trade_id, None);
    let guessed = client::statements::guess_trade(&t.api, pid, sid).await.unwrap();
    assert_eq!(guessed.id, trade.id);

    // Save with a different strategy and status
    let save = client::trades::TradeSave {
        strategy: TradeStrategy::TheWheel,
        status: TradeStatus::Closed,
        closed_at: Some("2026-08-20".parse().unwrap()),
        comment: Some("assigned".to_string()),
        risk: Some(9500.0),
    };
    let saved = client::trades::save_trade(&t.api, pid, trade.id, &save).await.unwrap();
    assert_eq!(saved.strategy, TradeStrategy::TheWheel);
    assert_eq!(saved.status, TradeStatus::Closed);

    client::trades::delete_trade(&t.api, pid, trade.id).await.unwrap();
    let after = client::statements::fetch_statement(&t.api, pid, sid).await.unwrap();
    assert_eq!(after.trade_id, None);
}

#[tokio::test]
async fn option_positions_page_renders_subtotals() {
    let t = boot().await;
    let pid = seed_portfolio(&t.state);
    let uid = t.state.db.insert_contract(&stock("ACME")).unwrap();
    let oid = t
        .state
        .db
        .insert_contract(&put(uid, "ACME", "2026-09-18", 95.0))
        .unwrap();
    let contract = t.state.db.get_contract(oid).unwrap();
    t.state
        .db
        .insert_position(&Position {
            id: 0,
            portfolio_id: pid,
            contract,
            quantity: -1.0,
            cost_basis: -120.0,
            base_rate: 0.9,
        })
        .unwrap();

    let html = reqwest::get(format!("{}/portfolio/{}/positions/options", t.base, pid))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("class=\"subtotal\""), "no subtotal row in page");
    assert!(html.contains("class=\"total\""), "no total row in page");
    // Strike 95 put with underlying at midpoint 100 is out of the money
    assert!(html.contains("OTM"));
}

#[tokio::test]
async fn trade_save_action_coerces_form_strings_and_redirects_to_parent() {
    let t = boot().await;
    let pid = seed_portfolio(&t.state);
    let uid = t.state.db.insert_contract(&stock("ACME")).unwrap();
    let oid = t
        .state
        .db
        .insert_contract(&put(uid, "ACME", "2026-09-18", 95.0))
        .unwrap();
    let mut s = dividend(pid, "2026-08-01".parse().unwrap(), 120.0);
    s.contract_id = Some(oid);
    s.kind = StatementKind::OptionTrade {
        quantity: -1.0,
        price: Some(1.2),
        proceeds: Some(120.0),
        fees: None,
        realized_pnl: None,
    };
    let sid = t.state.db.insert_statement(&s).unwrap();
    let trade = client::statements::create_trade(&t.api, pid, sid).await.unwrap();

    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let resp = http
        .post(format!("{}/portfolio/{}/trades/id/{}/save", t.base, pid, trade.id))
        .form(&[
            ("strategy", "3"),
            ("status", "open"),
            ("closed_at", ""),
            ("comment", "rolled"),
            ("risk", "9500"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["location"], "../");

    let saved = client::trades::fetch_trade(&t.api, pid, trade.id).await.unwrap();
    assert_eq!(saved.strategy, TradeStrategy::TheWheel);
    assert_eq!(saved.risk, Some(9500.0));
    assert_eq!(saved.comment.as_deref(), Some("rolled"));

    // The redirect target resolves to the trades index alias
    let resp = http
        .get(format!("{}/portfolio/{}/trades/id/", t.base, pid))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn delete_action_redirects_to_the_collection() {
    let t = boot().await;
    let pid = seed_portfolio(&t.state);
    let balance = t.state.db.insert_balance(pid, "USD", 1500.0).unwrap();

    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let resp = http
        .post(format!("{}/portfolio/{}/balances/{}/delete", t.base, pid, balance.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["location"], "../");

    // The redirect target resolves to the balances index alias
    let resp = http
        .get(format!("{}/portfolio/{}/balances/", t.base, pid))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(client::balances::fetch_balances(&t.api, pid).await.unwrap().is_empty());
}

#[tokio::test]
async fn option_chain_lists_contracts_for_one_underlying() {
    let t = boot().await;
    let uid = t.state.db.insert_contract(&stock("ACME")).unwrap();
    let zeta = t.state.db.insert_contract(&stock("ZETA")).unwrap();
    t.state
        .db
        .insert_contract(&put(uid, "ACME", "2026-10-16", 90.0))
        .unwrap();
    t.state
        .db
        .insert_contract(&put(uid, "ACME", "2026-09-18", 95.0))
        .unwrap();

    let chain = client::repository::fetch_options(&t.api, uid).await.unwrap();
    assert_eq!(chain.len(), 2);
    // Ordered by expiry
    match &chain[0].details {
        ContractDetails::Option { expiry, .. } => {
            assert_eq!(expiry.to_string(), "2026-09-18");
        }
        other => panic!("expected option details, got {:?}", other),
    }

    let empty = client::repository::fetch_options(&t.api, zeta).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn reports_page_links_the_windows_and_the_tax_report() {
    let t = boot().await;
    let pid = seed_portfolio(&t.state);

    let html = reqwest::get(format!("{}/portfolio/{}/reports", t.base, pid))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains(&format!("/portfolio/{}/reports/12m", pid)));
    let year = Utc::now().year();
    assert!(
        html.contains(&format!("/portfolio/{}/reports/year/{}", pid, year)),
        "no tax report link in page"
    );
}

#[tokio::test]
async fn pushed_quotes_show_up_in_repository_and_cache() {
    let t = boot().await;
    let uid = t.state.db.insert_contract(&stock("ACME")).unwrap();

    client::repository::push_quotes(
        &t.api,
        &[client::repository::QuoteUpdate {
            contract_id: uid,
            bid: Some(110.0),
            ask: Some(112.0),
            last: Some(111.0),
        }],
    )
    .await
    .unwrap();

    let stocks = client::repository::fetch_stocks(&t.api).await.unwrap();
    assert_eq!(stocks.len(), 1);
    assert_eq!(stocks[0].bid, Some(110.0));
    assert_eq!(t.state.get_quote(uid).unwrap().last, Some(111.0));
}

#[tokio::test]
async fn quote_push_with_unknown_contract_stores_nothing() {
    let t = boot().await;
    let uid = t.state.db.insert_contract(&stock("ACME")).unwrap();

    let err = client::repository::push_quotes(
        &t.api,
        &[
            client::repository::QuoteUpdate {
                contract_id: uid,
                bid: Some(110.0),
                ask: Some(112.0),
                last: Some(111.0),
            },
            client::repository::QuoteUpdate {
                contract_id: 9999,
                bid: None,
                ask: None,
                last: Some(1.0),
            },
        ],
    )
    .await
    .unwrap_err();
    match err {
        AppError::Api { status, .. } => assert_eq!(status, 404),
        other => panic!("expected Api error, got {:?}", other),
    }

    // The valid update earlier in the batch must not have landed anywhere
    let stocks = client::repository::fetch_stocks(&t.api).await.unwrap();
    assert_eq!(stocks[0].bid, Some(99.0));
    assert!(t.state.get_quote(uid).is_none());
}

#[tokio::test]
async fn balance_and_setting_round_trips() {
    let t = boot().await;
    let pid = seed_portfolio(&t.state);
    let balance = t.state.db.insert_balance(pid, "USD", 1500.0).unwrap();

    let save = client::balances::BalanceSave {
        currency: "USD".to_string(),
        quantity: 1800.0,
    };
    let updated = client::balances::save_balance(&t.api, pid, balance.id, &save)
        .await
        .unwrap();
    assert_eq!(updated.quantity, 1800.0);

    let setting = client::settings::create_setting(
        &t.api,
        pid,
        &client::settings::SettingSave {
            symbol: "ACME".to_string(),
            nav_ratio: 0.15,
            csp_strategy: 1,
            cc_strategy: 0,
            csp_delta: 0.3,
            cc_delta: 0.2,
            roll_put_days: 7,
            roll_call_days: 5,
        },
    )
    .await
    .unwrap();
    let settings = client::settings::fetch_settings(&t.api, pid).await.unwrap();
    assert_eq!(settings.len(), 1);
    assert_eq!(settings[0].id, setting.id);

    client::settings::delete_setting(&t.api, pid, setting.id).await.unwrap();
    assert!(client::settings::fetch_setting(&t.api, pid, setting.id)
        .await
        .is_err());
    client::balances::delete_balance(&t.api, pid, balance.id).await.unwrap();
    assert!(client::balances::fetch_balances(&t.api, pid).await.unwrap().is_empty());
}
