//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently has a single domain, `tools`: the stock quote and
//! weather tools it exposes to MCP clients.

pub mod tools;
