//! Todo business rules.
//!
//! The service sits between the transports (HTTP and MCP) and the store. It
//! validates input, owns the error taxonomy and round-trips every call to
//! the store; nothing is cached between calls.

mod error;
mod todos;

#[cfg(test)]
mod error_test;

pub use error::{ServiceError, ServiceResult};
pub use todos::TodoService;
