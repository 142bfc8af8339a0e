//! MCP server implementation for the contact book.
//!
//! This module provides the MCP protocol server that exposes the contact
//! store to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactBookServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact book server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: ContactBookServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
