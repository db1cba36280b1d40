//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool maps a validated parameter set onto exactly one HTTP request
//! against the Ganjinex REST API and passes the response body through.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool,
//!   grouped by exchange API area)
//! - `client.rs` - Shared `ExchangeClient` that executes the outbound requests
//! - `router.rs` - Dynamic ToolRouter builder for the stdio transport
//! - `registry.rs` - Central tool catalog metadata
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `market/my_tool.rs`)
//! 2. Define params, execute(), to_tool() and create_route()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs`
//!
//! **No need to modify `server.rs`!** The router is built dynamically.

mod client;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use client::ExchangeClient;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
