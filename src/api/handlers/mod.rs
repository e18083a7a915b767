//! HTTP handlers.

mod error;
mod system;
mod todos;

#[cfg(test)]
mod todos_test;

pub use error::*;
pub use system::*;
pub use todos::*;
