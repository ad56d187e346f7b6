//! Application state shared across request handlers

use crate::client::ApiClient;
use crate::config::Config;
use crate::db::FolioDb;
use crate::error::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// Latest quote pushed for a contract
#[derive(Debug, Clone, Copy)]
pub struct Quote {
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: Option<f64>,
}

/// State threaded through both routers
pub struct AppState {
    /// SQLite data layer behind the JSON API
    pub db: Arc<FolioDb>,

    /// HTTP client the page surface uses to talk to the JSON API
    pub api: ApiClient,

    /// Live quote cache (contract id -> quote), fed by the quote endpoint
    pub quotes: DashMap<i64, Quote>,

    pub config: Config,
}

impl AppState {
    /// Create the application state; `api_base` is the origin of the JSON API
    pub fn new(config: Config, api_base: String) -> Result<Self> {
        tracing::info!("Database file: {:?}", config.db_path);
        let db = Arc::new(FolioDb::new(&config.db_path)?);
        let api = ApiClient::new(api_base)?;

        Ok(Self {
            db,
            api,
            quotes: DashMap::new(),
            config,
        })
    }

    /// Cached quote for a contract, if one has been pushed
    pub fn get_quote(&self, contract_id: i64) -> Option<Quote> {
        self.quotes.get(&contract_id).map(|q| *q)
    }

    /// Store a batch of quotes, mirrored into the contracts' price columns.
    /// The columns are written in one transaction and the cache only after it
    /// commits, so an unknown id leaves neither touched.
    pub fn store_quotes(&self, quotes: &[(i64, Quote)]) -> Result<()> {
        let updates: Vec<_> = quotes
            .iter()
            .map(|&(id, q)| (id, q.bid, q.ask, q.last))
            .collect();
        self.db.update_contract_quotes(&updates)?;
        for &(id, quote) in quotes {
            self.quotes.insert(id, quote);
        }
        Ok(())
    }
}
