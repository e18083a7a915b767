//! Tool discovery for agents.
//!
//! Exposes the CRUD operation table two ways:
//!
//! - **server**: an MCP server over Streamable HTTP, one tool per operation
//! - **manifest**: a plain JSON document listing the same operations with
//!   their input and output schemas
//!
//! Both call into the same [`TodoService`](crate::service::TodoService) as
//! the HTTP handlers.

pub mod manifest;
pub mod server;
mod service;
pub mod tools;


pub use server::McpServer;
pub use service::create_mcp_service;
