//! MCP server exposing read-only Polymarket market data as four tools.

pub mod api;
pub mod cli;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
