use std::future::Future;

use axum::Router;
use configs::{AppConfig, WorkshopConfig};
use service::workshop::WorkshopStore;
use tracing::info;

use crate::routes::{self, ServerState};

/// Router over a fresh store seeded from the startup workshop settings.
pub fn build_app(workshop: &WorkshopConfig) -> Router {
    let store = WorkshopStore::seeded(workshop);
    info!(score = workshop.sweater_score, "workshop record initialized");
    routes::build_router(ServerState::new(store))
}

/// Bind and serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg.workshop);

    // host may be a name such as `localhost`, so let tokio resolve it
    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, path = routes::WORKSHOP_PATH, "workshop server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
