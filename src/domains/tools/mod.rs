//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool takes a raw `{"arguments": {...}}` context, calls at most two
//! upstream HTTP endpoints, and returns text or JSON.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `descriptor.rs` - Static tool metadata and its JSON renderings
//! - `invocation.rs` - Per-call argument parsing
//! - `handlers.rs` - The `ToolHandler` trait and the JSON error payload
//! - `registry.rs` - Central tool registry and dispatch by name
//! - `router.rs` - rmcp ToolRouter builder for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a `DESCRIPTOR` constant
//! 2. Implement `ToolHandler` for it
//! 3. Register it in `ToolRegistry::new`
//!
//! The router and both transports pick it up from the registry.

pub mod definitions;
mod descriptor;
mod error;
mod handlers;
mod invocation;
mod registry;
pub mod router;

pub use descriptor::{ToolDescriptor, ToolProperty};
pub use error::ToolError;
pub use handlers::{ToolHandler, error_payload};
pub use invocation::{ToolInvocation, invocation_context};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
