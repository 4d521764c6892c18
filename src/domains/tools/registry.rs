//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - Construction of every tool from configuration
//! - Tool metadata for listing
//! - Dispatch by name (used by the HTTP transport and by the router)

use std::sync::Arc;
use tracing::{debug, warn};

use rmcp::model::Tool;

use crate::core::config::Config;
use crate::core::error::{Error, Result};

use super::definitions::common::{build_client, build_quote_client};
use super::definitions::{
    HelloTool, NwsClient, StockPriceTool, WeatherAlertsTool, WeatherForecastTool,
    YahooQuoteProvider,
};
use super::error::ToolError;
use super::handlers::ToolHandler;
use super::invocation::invocation_context;

/// Tool registry - owns one handler per tool.
#[derive(Clone)]
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Build every tool against the configured upstream APIs.
    pub fn new(config: &Config) -> Result<Self> {
        let http = build_client(&config.apis)
            .map_err(|e| Error::internal(format!("Failed to create HTTP client: {}", e)))?;
        let quote_http = build_quote_client(&config.apis)
            .map_err(|e| Error::internal(format!("Failed to create quote client: {}", e)))?;

        let nws = NwsClient::new(http, config.apis.nws_base_url.clone());
        let quotes = Arc::new(YahooQuoteProvider::new(
            quote_http,
            config.apis.quote_base_url.clone(),
        ));

        let handlers: Vec<Arc<dyn ToolHandler>> = vec![
            Arc::new(HelloTool::new()),
            Arc::new(StockPriceTool::new(
                quotes,
                config.apis.quote_link_base.clone(),
            )),
            Arc::new(WeatherAlertsTool::new(nws.clone())),
            Arc::new(WeatherForecastTool::new(nws)),
        ];

        Ok(Self::with_handlers(handlers))
    }

    /// Build a registry from explicit handlers.
    pub fn with_handlers(handlers: Vec<Arc<dyn ToolHandler>>) -> Self {
        for handler in &handlers {
            let descriptor = handler.descriptor();
            debug!(
                "Registered tool {} with properties {}",
                descriptor.name,
                descriptor.properties_json()
            );
        }
        Self { handlers }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.handlers
            .iter()
            .map(|h| h.descriptor().to_tool())
            .collect()
    }

    /// All handlers, in registration order.
    pub fn handlers(&self) -> &[Arc<dyn ToolHandler>] {
        &self.handlers
    }

    /// Find a handler by tool name.
    pub fn handler(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.handlers.iter().find(|h| h.name() == name)
    }

    /// Run a tool by name with MCP-style arguments.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<String, ToolError> {
        let Some(handler) = self.handler(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };
        Ok(handler.handle(&invocation_context(arguments)).await)
    }
}
