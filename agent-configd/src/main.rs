//! Service daemon: wires configuration, store backend, and HTTP surface.

use std::sync::Arc;

use agent_api::{router, ApiConfig, AppState, StoreBackend};
use agent_schema::Validator;
use agent_store::{ConfigStore, MemoryStore, PostgresConfig, PostgresStore};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ApiConfig::from_env();
    info!(
        addr = %config.bind_addr,
        backend = ?config.backend,
        validation = ?config.validation,
        create_policy = ?config.create_policy,
        cors = ?config.cors,
        "starting agent configuration service"
    );

    let store: Arc<dyn ConfigStore> = match config.backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Postgres => Arc::new(
            PostgresStore::connect(&PostgresConfig::from_env())
                .await
                .context("postgres store setup failed")?,
        ),
    };

    let validator = Validator::new(
        config.validation,
        config.providers.clone(),
        config.clients.clone(),
    );
    let state = Arc::new(AppState::new(validator, store, config.create_policy));
    let app = router(state, config.cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("install sigterm handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    info!("shutdown signal received");
}
