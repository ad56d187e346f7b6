//! HTTP server: binds the listener first so the page surface can default its
//! API base URL to the actual bound address (which matters when the
//! configured port is 0).

use crate::config::Config;
use crate::error::Result;
use crate::state::AppState;
use crate::{api, web};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl Server {
    /// Bind the listener and build the shared state
    pub async fn bind(config: Config) -> Result<Self> {
        let listener = TcpListener::bind(config.listen_addr).await?;
        let local_addr = listener.local_addr()?;
        let api_base = config
            .api_base_url
            .clone()
            .unwrap_or_else(|| format!("http://{}", local_addr));
        tracing::info!("JSON API base: {}", api_base);

        let state = Arc::new(AppState::new(config, api_base)?);
        Ok(Self { listener, state })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run both surfaces on the one listener until the process stops
    pub async fn serve(self) -> Result<()> {
        let app = api::router()
            .merge(web::router())
            .with_state(self.state)
            .layer(TraceLayer::new_for_http());

        tracing::info!("Listening on http://{}", self.listener.local_addr()?);
        axum::serve(self.listener, app).await?;
        Ok(())
    }
}
