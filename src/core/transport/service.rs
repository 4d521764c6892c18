//! Transport service - runs whichever transport the configuration selects.

use tracing::{info, instrument};

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

/// Owns the transport choice and drives the server over it.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Serve until the transport shuts down (STDIO: client closes stdin;
    /// TCP/HTTP: process is stopped or the listener fails).
    #[instrument(skip_all, fields(transport = %self.config.description()))]
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport");

        let outcome = match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => super::stdio::StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => super::tcp::TcpTransport::new(cfg).run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => super::http::HttpTransport::new(cfg).run(server).await,
        };

        info!("Transport stopped");
        outcome
    }
}
