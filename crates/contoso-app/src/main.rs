use std::sync::Arc;

use contoso_app::app::api::negotiate::{FormatterSet, OutputFormattersHandler};
use contoso_app::app::api::routes;
use contoso_app::config::ConfigHandler;
use contoso_app::store::{ContactStore, InMemoryContactStore};
use contoso_app::store_handler::ContactStoreHandler;
use contoso_core::config::load_config;
use salvo::conn::TcpListener;
use salvo::logging::Logger;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Contoso contacts server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store: Arc<dyn ContactStore> = match &config.contacts.seed_file {
        Some(path) => Arc::new(InMemoryContactStore::from_seed_file(path).await?),
        None => Arc::new(InMemoryContactStore::new()),
    };

    let formatters = Arc::new(FormatterSet::from_settings(&config));

    tracing::info!(formatters = ?formatters, "Output formatters configured");

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(Logger::new())
        .hoop(ConfigHandler {
            settings: Arc::new(config),
        })
        .hoop(ContactStoreHandler { store })
        .hoop(OutputFormattersHandler { formatters })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
