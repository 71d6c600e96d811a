/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Request Pipeline
 *
 * Outermost first:
 * 1. `TraceLayer` request span
 * 2. CORS for the configured frontend origin, with credentials
 * 3. Security headers
 * 4. Rate limiter
 * 5. Public routes, or `require_auth` then the protected routes
 * 6. Fallback: 404 `Page not found`
 */

use axum::{
    http::{header, HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::AppError;
use crate::backend::middleware::{rate_limit, require_auth, security_headers};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::server::config::AppConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared by every handler
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let public = configure_auth_routes(Router::new());

    // route_layer keeps unmatched paths out of the auth check
    let protected = configure_api_routes(Router::new())
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .fallback(not_found)
        .layer(from_fn_with_state(app_state.clone(), rate_limit))
        .layer(from_fn(security_headers))
        .layer(cors_layer(&app_state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}

/// CORS for the single configured frontend origin
///
/// Cookies only flow cross-origin with `allow_credentials`, which in turn
/// forbids wildcard origins, methods and headers.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origin = match HeaderValue::from_str(&config.cors_origin) {
        Ok(origin) => AllowOrigin::exact(origin),
        Err(e) => {
            tracing::error!("Invalid CORS_ORIGIN '{}': {}", config.cors_origin, e);
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}
