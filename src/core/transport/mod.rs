//! Transport layer for the MCP server.
//!
//! Stdio is the only supported channel: the MCP client owns this process and
//! speaks JSON-RPC over stdin/stdout, which is why all logging goes to
//! stderr.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
