//! Stock quote and weather MCP server.
//!
//! Exposes four tools over the Model Context Protocol: `hello_mcp`,
//! `get_stockprice`, `get_weatheralerts` and `get_weatherforecast`. Each
//! tool parses its arguments, makes at most two upstream HTTP calls and
//! returns formatted text or JSON; failures come back as values, never as
//! protocol errors.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool descriptors, argument parsing and the tool handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use market_weather_mcp::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
