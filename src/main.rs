use smartplug_api::gateway::TasmotaClient;
use smartplug_api::{create_pool, init_schema, routes, Config};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartplug_api=info,tower_http=info".into()),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(devices = config.devices.addresses.len(), "Configuration loaded");

    // Create database pool and ensure the readings table exists
    let pool = create_pool(&config).await?;
    init_schema(&pool).await?;
    info!("Database ready");

    // Wire repository, device gateway and service
    let repository = smartplug_api::repositories::ReadingRepository::new(pool);
    let client = TasmotaClient::new(Duration::from_secs(config.devices.timeout_secs))?;
    let service = smartplug_api::services::PlugService::new(
        repository,
        Arc::new(client),
        config.devices.addresses.clone(),
        config.pricing.kwh_price_cents,
    );

    // Create router
    let app = routes::create_router(service);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
