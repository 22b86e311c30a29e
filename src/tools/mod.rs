//! The four market tools: argument checks, listing, formatting and dispatch.

pub mod args;
pub mod catalog;
pub mod dispatcher;
pub mod format;
pub mod listing;

pub use catalog::{catalog, ToolMeta};
pub use dispatcher::ToolDispatcher;
