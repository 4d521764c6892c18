//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Each registered handler becomes one dynamic route. The route rebuilds the
//! raw `{"arguments": ...}` context from the MCP call and always answers with
//! a successful text result; tool-level failures live inside the text.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};
use rmcp::model::{CallToolResult, Content};
use tracing::info;

use super::handlers::ToolHandler;
use super::invocation::invocation_context;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .handlers()
        .iter()
        .cloned()
        .fold(ToolRouter::new(), |router, handler| {
            router.with_route(create_route(handler))
        })
}

/// Create a ToolRoute for STDIO/TCP transport.
fn create_route<S>(handler: Arc<dyn ToolHandler>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(
        handler.descriptor().to_tool(),
        move |ctx: ToolCallContext<'_, S>| {
            let handler = handler.clone();
            let arguments = ctx
                .arguments
                .clone()
                .map(serde_json::Value::Object)
                .unwrap_or_default();
            async move {
                info!("Tool call: {}", handler.name());
                let output = handler.handle(&invocation_context(arguments)).await;
                Ok(CallToolResult::success(vec![Content::text(output)]))
            }
            .boxed()
        },
    )
}
