//! Ganjinex MCP Server Library
//!
//! This crate exposes the Ganjinex cryptocurrency exchange REST API as a set
//! of MCP (Model Context Protocol) tools served over stdio.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, the
//!   main server handler, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the exchange tool catalog and the shared HTTP client behind it
//!
//! # Example
//!
//! ```rust,no_run
//! use ganjinex_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_args(std::env::args())?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
