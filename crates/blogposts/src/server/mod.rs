mod cli;
mod envelope;
mod handlers;
mod routes;
mod state;

pub use cli::ServeOptions;
pub use envelope::Envelope;

use std::time::Duration;

use blogposts_core::seed::load_seed;
use blogposts_core::CollectionStore;

use crate::prelude::*;
use state::AppState;

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    log::info!("starting blogposts API service");

    // A seed that fails to load must stop startup before the socket is bound
    let store = match &options.store_init {
        Some(path) => load_seed(path).map_err(|e| eyre!("Failed to initialize store: {e}"))?,
        None => {
            log::warn!("no seed file configured, starting with an empty store");
            CollectionStore::new()
        }
    };

    let state = AppState::new(store, Duration::from_secs(options.timeout));
    let app_router = routes::router(state);

    let addr = f!("{}:{}", options.host, options.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("listening on http://{addr}");
    if global.verbose {
        log::debug!("posts endpoint: http://{addr}{}/posts", routes::API_VERSION);
        log::debug!(
            "healthcheck endpoint: http://{addr}{}/healthcheck",
            routes::API_VERSION
        );
        log::debug!("request timeout: {}s", options.timeout);
    }

    axum::serve(listener, app_router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("finished blogposts API service");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    log::info!("shutdown signal received");
}
