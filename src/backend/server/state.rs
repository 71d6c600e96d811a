/**
 * Application State Management
 *
 * `AppState` is the explicitly constructed context every handler and
 * middleware receives: configuration, the store, the token keys and the
 * rate limiter. It is cheap to clone; every field is a handle.
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State(store): State<Store>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::middleware::rate_limit::RateLimiter;
use crate::backend::server::config::AppConfig;
use crate::backend::store::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Store,
    pub tokens: TokenKeys,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    /// Assemble the state from a loaded configuration and an opened store
    pub fn new(config: AppConfig, store: Store) -> Self {
        let tokens = TokenKeys::new(config.jwt_secret.as_bytes(), config.token_ttl);
        let rate_limiter = RateLimiter::new(config.rate_limit_max, config.rate_limit_window);

        Self {
            config: Arc::new(config),
            store,
            tokens,
            rate_limiter,
        }
    }
}

impl FromRef<AppState> for Store {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
