//! Environment-driven configuration

use crate::error::{AppError, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

/// Server configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
    /// Path of the SQLite database file
    pub db_path: PathBuf,
    /// Origin of the JSON API the page surface talks to.
    /// When unset, the pages use this process's own listener.
    pub api_base_url: Option<String>,
}

impl Config {
    /// Load configuration from the environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr = match std::env::var("FOLIODESK_LISTEN") {
            Ok(addr) => addr
                .parse()
                .map_err(|e| AppError::Config(format!("Invalid FOLIODESK_LISTEN: {}", e)))?,
            Err(_) => SocketAddr::from(([127, 0, 0, 1], 8020)),
        };

        let db_path = std::env::var("FOLIODESK_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("foliodesk.db"));

        let api_base_url = match std::env::var("FOLIODESK_API_URL") {
            Ok(raw) => {
                let url = Url::parse(&raw)
                    .map_err(|e| AppError::Config(format!("Invalid FOLIODESK_API_URL: {}", e)))?;
                // Keep the origin only; client modules append /api/... paths.
                Some(url.origin().ascii_serialization())
            }
            Err(_) => None,
        };

        Ok(Self {
            listen_addr,
            db_path,
            api_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_reduced_to_origin() {
        let url = Url::parse("http://tracker.local:9000/some/path").unwrap();
        assert_eq!(url.origin().ascii_serialization(), "http://tracker.local:9000");
    }
}
