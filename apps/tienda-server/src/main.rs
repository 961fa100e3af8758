//! Tienda server - Axum setup, database wiring and lifecycle
//!
//! Composition happens here: configuration, database connection, migrations,
//! repositories, domain service and router are assembled explicitly at
//! startup.

mod config;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use catalog_service::api::rest::routes::register_routes;
use catalog_service::config::AuthConfig;
use catalog_service::domain::Service;
use catalog_service::infra::storage::migrations::Migrator;
use catalog_service::infra::storage::repositories::{
    SeaOrmOrdersRepository, SeaOrmProductsRepository, SeaOrmProfilesRepository,
    SeaOrmUsersRepository,
};
use clap::Parser;
use config::AppConfig;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Server command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tienda-server", about = "Store catalog REST API server")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = AppConfig::load(args.config.as_deref())?;

    info!(url = %cfg.database.url, "connecting to database");
    let db = Database::connect(&cfg.database.url)
        .await
        .context("failed to connect to database")?;

    Migrator::up(&db, None)
        .await
        .context("failed to run migrations")?;

    let app = build_app(
        Arc::new(db),
        Arc::new(cfg.catalog.auth.clone()),
        cfg.server.request_timeout_secs,
    );

    let addr: SocketAddr = format!("{}:{}", cfg.server.bind, cfg.server.port)
        .parse()
        .context("invalid bind address")?;

    info!("starting tienda-server on http://{addr}");
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

/// Assemble repositories, service, routes and middleware
fn build_app(db: Arc<DatabaseConnection>, auth: Arc<AuthConfig>, timeout_secs: u64) -> Router {
    let products = Arc::new(SeaOrmProductsRepository::new(db.clone()));
    let orders = Arc::new(SeaOrmOrdersRepository::new(db.clone()));
    let profiles = Arc::new(SeaOrmProfilesRepository::new(db.clone()));
    let users = Arc::new(SeaOrmUsersRepository::new(db));
    let service = Arc::new(Service::new(products, orders, profiles, users));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(timeout_secs)))
        .layer(cors);

    let router = Router::new().route("/health", get(health));
    register_routes(router, service, auth).layer(middleware)
}

async fn health() -> &'static str {
    "ok"
}

/// Graceful shutdown on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(error = %error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                warn!(error = %error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            warn!("received SIGTERM, initiating graceful shutdown");
        }
    }
}
