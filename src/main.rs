//! Racing Team Registry API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use racing_team_registry::infrastructure::driven_adapters::{
    AppConfig, EmailCipher, PostgresCarRepository, PostgresDriverRepository,
    PostgresTeamRepository,
};
use racing_team_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "racing_team_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool =
        racing_team_registry::infrastructure::driven_adapters::database::create_pool(
            &config.database,
        )
        .await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Email-at-rest cipher
    let cipher = Arc::new(EmailCipher::from_base64_key(&config.encryption.email_key)?);

    // Create repositories
    let team_repository = Arc::new(PostgresTeamRepository::new(pool.clone()));
    let driver_repository = Arc::new(PostgresDriverRepository::new(pool.clone(), cipher));
    let car_repository = Arc::new(PostgresCarRepository::new(pool));

    // Wire use cases and build router
    let state = AppState::new(team_repository, driver_repository, car_repository);
    let app = api_rest::app(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
