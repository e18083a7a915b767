//! Todo list API: CRUD over HTTP backed by SQLite, with tool discovery for
//! agents over MCP and a JSON manifest.

pub mod api;
pub mod cli;
pub mod db;
pub mod mcp;
pub mod service;
