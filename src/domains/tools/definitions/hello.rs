//! Hello tool: a fixed greeting, useful to check that the host can reach us.

use tracing::info;

use crate::domains::tools::{ToolDescriptor, ToolHandler};

/// Greeting tool implementation.
#[derive(Debug, Clone, Default)]
pub struct HelloTool;

impl HelloTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "hello_mcp";

    /// Text returned for every call.
    pub const GREETING: &'static str = "Hello I am MCPTool!";

    pub const DESCRIPTOR: ToolDescriptor = ToolDescriptor {
        name: Self::NAME,
        description: "Hello world.",
        properties: &[],
    };

    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ToolHandler for HelloTool {
    fn descriptor(&self) -> ToolDescriptor {
        Self::DESCRIPTOR
    }

    async fn handle(&self, _context: &str) -> String {
        info!("Hello tool called");
        Self::GREETING.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_ignores_input() {
        let tool = HelloTool::new();
        for context in ["", "{not json", r#"{"arguments": {"x": 1}}"#, "null"] {
            assert_eq!(tool.handle(context).await, "Hello I am MCPTool!");
        }
    }

    #[test]
    fn test_hello_descriptor() {
        assert_eq!(HelloTool.name(), "hello_mcp");
        assert_eq!(HelloTool::DESCRIPTOR.properties_json(), "[]");
    }
}
