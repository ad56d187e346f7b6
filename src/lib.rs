//! FolioDesk: a personal investment portfolio tracker
//!
//! One process serves two surfaces from the same listener: a JSON API over
//! the SQLite data layer, and server-rendered HTML pages that consume that
//! API over HTTP like any other client would.

pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod server;
pub mod state;
pub mod web;

use config::Config;
use server::Server;

/// Load configuration, bind and serve
pub async fn run() -> error::Result<()> {
    let config = Config::from_env()?;
    let server = Server::bind(config).await?;
    server.serve().await
}
