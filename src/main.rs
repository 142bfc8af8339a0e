//! Contact Book - Main entry point
//!
//! Opens the contact file and serves the contact book over MCP on stdio.

use anyhow::Result;
use contact_book::services::{ContactService, ContactServiceImpl};
use contact_book::{
    Config, ContactBookServer, ContactStore, FileKeyValueStore, KeyValuePersistence,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact book with data file: {}",
        config.data_file.display()
    );

    let persistence = KeyValuePersistence::new(
        FileKeyValueStore::new(&config.data_file),
        config.storage_key.clone(),
    );

    let store = match ContactStore::open_with_mode(Box::new(persistence), config.index_mode) {
        Ok(store) => {
            info!("Loaded {} contact(s)", store.contacts().len());
            store
        }
        Err(e) => {
            error!("Failed to open contact list: {}", e);
            return Err(e.into());
        }
    };

    let contact_service = Arc::new(ContactServiceImpl::new(store)) as Arc<dyn ContactService>;
    let server = ContactBookServer::new(contact_service);

    info!("Starting MCP server with stdio transport");
    contact_book::server::run_server(server).await?;

    info!("Contact book shutdown complete");
    Ok(())
}
