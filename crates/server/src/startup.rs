use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::Repositories;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the configured storage backend and wire the services to it.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let repos = match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!("memory storage backend selected; data is lost on restart");
            Repositories::in_memory()
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            if cfg.database.run_migrations {
                migration::Migrator::up(&db, None)
                    .await
                    .map_err(|e| StartupError::Migration(e.to_string()))?;
                info!("migrations applied");
            }
            Repositories::seaorm(db)
        }
    };
    Ok(ServerState::from_repositories(repos))
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only on process kill");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, draining connections");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port))
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {}:{}: {e}", cfg.server.host, cfg.server.port)))?;
    info!(addr = ?listener.local_addr().ok(), backend = ?cfg.storage.backend, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_builds_without_database() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        let state = build_state(&cfg).await.unwrap();
        assert!(state.services.categories.list().await.is_success());
    }
}
