mod config;
mod db;
mod error;
mod handlers;
mod routes;
mod schema;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::routes::create_router;
use crate::state::AppState;
use crate::store::{DocumentStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = AppConfig::from_env()?;

    tracing::info!("Starting course admin backend server");

    let store = open_store(&config).await?;
    tracing::info!(
        "Webinar times are interpreted in the {} timezone",
        config.webinar_timezone
    );
    if let Some(warning) = config.timezone_warning() {
        tracing::warn!("{}", warning);
    }

    let app = create_app(AppState::new(store, config.webinar_timezone), &config);

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn open_store(config: &AppConfig) -> Result<Arc<dyn DocumentStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = db::establish_connection_pool(url, config.db_pool_size)?;
            let store = PgStore::new(pool);
            store.ensure_schema().await?;
            tracing::info!("Database connection pool initialized");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, records are kept in memory and lost on restart");
            Ok(Arc::new(MemoryStore::default()))
        }
    }
}

fn create_app(state: AppState, config: &AppConfig) -> Router {
    let app = create_router(state).layer(build_cors_layer(config.cors_allowed_origins.as_deref()));

    // Serve static frontend files if the directory exists
    let frontend_dir = &config.frontend_dir;
    if std::path::Path::new(frontend_dir).exists() {
        tracing::info!("Serving frontend from {}", frontend_dir);
        let index_path = format!("{}/index.html", frontend_dir);
        let serve_dir = ServeDir::new(frontend_dir).not_found_service(ServeFile::new(index_path));
        app.fallback_service(serve_dir)
    } else {
        tracing::info!(
            "Frontend directory not found at {}, serving API only",
            frontend_dir
        );
        app
    }
}

/// Restrict CORS to the configured origins, or allow any origin when none are set.
fn build_cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let origins: Vec<_> = allowed_origins
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, using permissive CORS");
        return CorsLayer::permissive();
    }

    tracing::info!("CORS configured for origins: {:?}", origins);
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
