//! Main REST API server for the quotes service.
//!
//! Wires the in-memory store to the REST API with configuration
//! parsing and graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use quote_api::{router::Router, server::Server};
use quote_store::{QuoteStore, ServiceConfig};
use tokio::signal;

/// Command-line arguments for the quotes server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 6543)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    request_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    // Create configuration
    let config = Arc::new(ServiceConfig {
        request_timeout_ms: args.request_timeout_ms,
    });

    // Create the store and seed it so the baseline set is served
    // before the first explicit reset
    let store = Arc::new(QuoteStore::new());
    store.reset()?;
    tracing::info!("Seeded store with {} quotes", store.quote_count()?);

    // Create router and server
    let router = Router::new(store, config);
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let server = Server::bind(addr, router).await?;

    println!("Starting quotes server...");
    println!("  Host: {}", args.host);
    println!("  Port: {}", args.port);
    println!("  Request timeout: {} ms", args.request_timeout_ms);

    // Start server with graceful shutdown
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.serve().await {
            tracing::error!("Server error: {}", e);
        }
    });

    // Wait for Ctrl+C
    signal::ctrl_c().await.expect("Failed to listen for ctrl_c");
    println!("\nShutting down server...");
    server_handle.abort();

    Ok(())
}
