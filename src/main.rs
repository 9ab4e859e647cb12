use std::sync::Arc;

use anyhow::Context;

use sanctuary_api::config::{self, StoreBackend};
use sanctuary_api::routes;
use sanctuary_api::state::AppState;
use sanctuary_api::store::{DocumentStore, MemoryStore, PostgresStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, SANCTUARY_JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Sanctuary API in {:?} mode", config.environment);

    let store: Arc<dyn DocumentStore> = match config.store.backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Postgres => {
            let database_url = std::env::var("DATABASE_URL")
                .context("DATABASE_URL is required for the postgres store backend")?;
            Arc::new(PostgresStore::connect(&database_url, config.store.max_connections).await?)
        }
    };

    let app = routes::app(AppState::new(store));

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    println!("🦁 Sanctuary API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
