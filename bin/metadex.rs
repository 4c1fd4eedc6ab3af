use anyhow::Result;
use clap::Parser;
use metadex::{create_router, AppState, IndexSettings, MetadataStore, ServerConfig, StoreMetrics};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "metadex")]
#[command(about = "Metadata record store with generic attribute search", long_about = None)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "METADEX_BIND_ADDR", default_value = "0.0.0.0")]
    bind_addr: String,

    /// HTTP API port
    #[arg(long, env = "METADEX_HTTP_PORT", default_value = "8080")]
    http_port: u16,

    /// Disable indexing the individual words of multi-word values
    #[arg(long, env = "METADEX_DISABLE_INDEX_WORDS")]
    disable_index_words: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = ServerConfig::new(args.bind_addr, args.http_port).with_index_settings(
        IndexSettings::default().with_index_words(!args.disable_index_words),
    );

    info!("Starting metadex v{}", metadex::VERSION);
    info!("  Listen address: {}", config.http_addr());
    info!("  Word indexing: {}", config.index_settings.index_words);

    let store = Arc::new(MetadataStore::new(config.index_settings.clone()));
    info!("Metadata store initialized");

    let metrics = Arc::new(StoreMetrics::new()?);
    info!("Metrics initialized");

    let app = create_router(AppState { store, metrics });
    let listener = tokio::net::TcpListener::bind(config.http_addr()).await?;
    info!("HTTP API server listening on {}", config.http_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
            info!("Received shutdown signal, gracefully shutting down");
        })
        .await?;

    Ok(())
}
