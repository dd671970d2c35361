//! # Quire API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use clap::Parser;
use tracing_actix_web::TracingLogger;

use quire_infra::{PostgresPostRepository, Storage};

mod config;
mod handlers;
mod mapper;
mod middleware;
mod state;
mod telemetry;

use crate::config::{AppConfig, Cli, HttpServerConfig};
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;

    telemetry::init_telemetry(&TelemetryConfig::for_env(config.env));

    // Storage is mandatory: no storage, no server.
    let storage = Storage::connect(&config.database())
        .await
        .context("failed to initialize storage")?;

    let state = AppState::new(Arc::new(PostgresPostRepository::new(storage.clone())));

    serve(&config.http_server, state, storage).await
}

/// Bind and run the HTTP server, then close storage once on every exit path.
async fn serve(config: &HttpServerConfig, state: AppState, storage: Storage) -> anyhow::Result<()> {
    tracing::info!("Starting Quire API Server on {}:{}", config.address, config.port);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let result = match server.bind((config.address.as_str(), config.port)) {
        Ok(server) => server.run().await,
        Err(e) => Err(e),
    };

    tracing::info!("Server stopped, closing storage");
    storage.close().await.context("failed to close storage")?;

    result.context("http server failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_infra::InMemoryPostRepository;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[actix_web::test]
    async fn test_bind_failure_still_closes_storage() {
        // Hold the port so the server cannot bind it.
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let config = HttpServerConfig {
            address: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
            workers: Some(1),
        };
        let storage =
            Storage::from_connection(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let state = AppState::new(Arc::new(InMemoryPostRepository::new()));

        let err = serve(&config, state, storage).await.unwrap_err();

        // The context is only attached after the storage close succeeded.
        assert!(format!("{:#}", err).starts_with("http server failed"));
    }
}
