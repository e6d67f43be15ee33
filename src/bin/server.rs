//! HTTP server entry point for the task API.
//!
//! Reads [`AppConfig`] from the environment, initialises tracing, selects
//! the repository backend (`PostgreSQL` when `DATABASE_URL` is set,
//! otherwise in-memory), and serves the task router on `PORT`
//! (default 8080).

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use taskboard::config::AppConfig;
use taskboard::http::{AppState, router};
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::adapters::postgres::PostgresTaskRepository;
use taskboard::task::ports::TaskRepository;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn build_repository() -> Result<Arc<dyn TaskRepository>, BoxError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let manager = ConnectionManager::<PgConnection>::new(url);
            let pool = Pool::builder().build(manager)?;
            info!("using PostgreSQL task repository");
            Ok(Arc::new(PostgresTaskRepository::new(pool)))
        }
        Err(_) => {
            info!("DATABASE_URL not set, using in-memory task repository");
            Ok(Arc::new(InMemoryTaskRepository::new()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(config.log_level.tracing_level().into()),
        )
        .init();

    info!(
        app_name = %config.app_name,
        version = %config.version,
        environment = %config.environment,
        debug = config.debug,
        "starting task API server"
    );

    let repository = build_repository()?;
    let state = AppState::new(repository);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_owned());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
