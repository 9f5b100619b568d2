//! Service entry point
//!
//! Reads configuration from a TOML file, runs database migrations and
//! serves the user-account REST API.

use std::sync::Arc;

use tracing::{error, info};

use accounts_service::application::users::{RecordValidator, UserService};
use accounts_service::infrastructure::crypto::PasswordHasher;
use accounts_service::infrastructure::database::connect_and_migrate;
use accounts_service::infrastructure::database::repositories::UserRepository;
use accounts_service::{create_api_router, default_config_path, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("ACCOUNTS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting accounts service...");

    // ── Database ───────────────────────────────────────────────
    let db_url = app_cfg.database.connection_url();
    info!("Database: {}", db_url);

    let db = match connect_and_migrate(&db_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };

    // ── Service wiring ─────────────────────────────────────────
    let repo = Arc::new(UserRepository::new(db.clone()));
    let user_service = Arc::new(UserService::new(
        repo,
        RecordValidator::new(),
        PasswordHasher::new(app_cfg.security.bcrypt_cost),
    ));

    let router = create_api_router(db, user_service);

    // ── Serve ──────────────────────────────────────────────────
    let address = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("REST API listening on http://{}", address);
    info!("Swagger UI available at http://{}/swagger-ui", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
