//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` implements the rmcp `ServerHandler` for the STDIO and TCP
//! transports and offers plain JSON helpers for the HTTP transport. Both
//! paths dispatch through the same [`ToolRegistry`].

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::tools::{ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Stock quote and US weather tools. Use get_stockprice with a ticker \
     symbol, get_weatheralerts with a two-letter state code, and get_weatherforecast with a \
     latitude and longitude.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tool handlers.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> CoreResult<Self> {
        let registry = ToolRegistry::new(&config)?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an already-built registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(&registry),
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Usage hints sent to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Returns an MCP `CallToolResult` as JSON; only an unknown tool name is
    /// an error.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, String> {
        let output = self
            .registry
            .call_tool(name, arguments)
            .await
            .map_err(|e| e.to_string())?;

        serde_json::to_value(CallToolResult::success(vec![Content::text(output)]))
            .map_err(|e| e.to_string())
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_list_tools() {
        let tools = server().list_tools();
        assert_eq!(tools.len(), 4);
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
    }

    #[test]
    fn test_get_info_advertises_tools() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.instructions.unwrap().contains("get_stockprice"));
    }

    #[tokio::test]
    async fn test_call_tool_wraps_output() {
        let result = server()
            .call_tool("hello_mcp", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result["content"][0]["type"], "text");
        assert_eq!(result["content"][0]["text"], "Hello I am MCPTool!");
        assert_eq!(result["isError"], false);
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let err = server()
            .call_tool("get_horoscope", serde_json::json!({}))
            .await
            .unwrap_err();
        assert_eq!(err, "Tool not found: get_horoscope");
    }
}
