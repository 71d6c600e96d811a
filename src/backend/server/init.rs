/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Open the store (Postgres with migrations, or in-memory)
 * 2. Build `AppState` from the configuration and the store
 * 3. Start the periodic rate-limit cleanup task
 * 4. Create and configure the router
 */

use std::time::Duration;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_store, AppConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails only when `DATABASE_URL` is set and the database is unreachable.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing Mesto backend server");

    let store = connect_store(&config).await?;
    tracing::info!("Using {} store", store.backend_name());

    let cleanup_every = config.rate_limit_window;
    let app_state = AppState::new(config, store);

    let app = create_router(app_state.clone());

    // Forget clients whose window has ended
    let limiter = app_state.rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_every.max(Duration::from_secs(1)));
        loop {
            interval.tick().await;
            limiter.purge_expired();
            tracing::debug!("Purged expired rate limit windows");
        }
    });

    tracing::info!("Router configured with periodic rate limit cleanup");

    Ok(app)
}
