//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, cache selection and the Axum
//! server lifecycle.

use crate::config::{CacheBackend, Config};
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache, RedisCache};
use crate::infrastructure::persistence::{
    PgCompanyRepository, PgJobRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::jwt::TokenCodec;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations (unless `RUN_MIGRATIONS=false`)
/// - Listing cache (Redis, in-memory, or NullCache)
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Migrations applied");
    }

    let cache = build_cache(&config).await;

    let pool = Arc::new(pool);
    let tokens = TokenCodec::new(
        &config.jwt_secret,
        chrono::Duration::hours(config.token_ttl_hours),
    );

    let state = AppState::from_repositories(
        Arc::new(PgJobRepository::new(pool.clone())),
        Arc::new(PgCompanyRepository::new(pool.clone())),
        Arc::new(PgUserRepository::new(pool)),
        cache,
        tokens,
        Duration::from_secs(config.cache_ttl_seconds),
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the connection pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database is unreachable within the connect timeout.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Selects the listing cache backend.
///
/// An unreachable Redis is not fatal: the service starts with caching
/// disabled and every listing goes to the database.
async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    match config.cache_backend {
        CacheBackend::Redis => match RedisCache::connect(&config.redis_url).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        },
        CacheBackend::Memory => {
            tracing::info!("Cache enabled (in-process)");
            Arc::new(MemoryCache::new())
        }
        CacheBackend::None => {
            tracing::info!("Cache disabled (NullCache)");
            Arc::new(NullCache::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
