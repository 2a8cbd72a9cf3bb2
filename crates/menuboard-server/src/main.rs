//! menuboard server: application entry point.

use menuboard_db::DbManager;
use menuboard_server::{AppConfig, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("menuboard=info".parse()?))
        .json()
        .init();

    info!("Starting menuboard server...");

    let config = AppConfig::load()?;

    let db = DbManager::connect(&config.database).await?;
    menuboard_db::run_migrations(db.client()).await?;

    let state = AppState::new(
        db.client().clone(),
        config.auth.clone(),
        &config.server.public_base_url,
    );

    if let Some(admin) = &config.server.admin {
        state
            .policy
            .ensure_admin(&admin.username, &admin.password)
            .await?;
    }

    let app = menuboard_server::build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    info!(addr = %config.server.bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("menuboard server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
