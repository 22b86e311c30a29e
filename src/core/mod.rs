//! Core types & traits: protocol-agnostic contracts for tools and the backend.

pub mod backend;
pub mod content;
pub mod error;
pub mod mcp;
pub mod tool;
