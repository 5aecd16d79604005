//! # syncpartd — syncpart daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `tracing` subscriber
//! - Construct the content store (adapter) and seed it from config
//! - Construct the application service, injecting the store via the port trait
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use syncpart_adapter_http_axum::state::AppState;
use syncpart_adapter_memory::InMemoryContentStore;
use syncpart_app::services::content_service::ContentService;
use syncpart_domain::content::Content;
use syncpart_domain::id::EntityIdentifier;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(
            &config.logging.filter,
        )?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Content store
    let store = InMemoryContentStore::new();
    for (token, payload) in &config.store.entries {
        let identifier = EntityIdentifier::new(token.clone())
            .with_context(|| format!("invalid store entry identifier {token:?}"))?;
        store.insert(identifier, Content::new(payload.clone()));
    }
    tracing::info!(entries = store.len(), "content store seeded");

    // Service + HTTP
    let state = AppState::new(ContentService::new(store));
    let app = syncpart_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "syncpartd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::error!(error = %err, "unable to listen for shutdown signal");
            // Without a signal stream there is nothing to wait for; park the
            // task so the server keeps running.
            std::future::pending::<()>().await;
        }
    }
}
