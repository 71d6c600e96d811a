/**
 * Authentication Middleware
 *
 * Protects the user and card routes. The session token is read from the
 * `jwt` cookie and verified; the resulting `Identity` is attached to the
 * request extensions for handlers to extract.
 *
 * Missing, malformed, foreign-signed and expired tokens all produce the
 * same 401 `Authorization required` response.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::backend::auth::sessions::TOKEN_COOKIE;
use crate::backend::error::AppError;
use crate::backend::server::state::AppState;
use crate::shared::ObjectId;

/// The caller's user id, taken from a verified session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity(pub ObjectId);

impl Identity {
    pub fn id(&self) -> &ObjectId {
        &self.0
    }
}

/// Authentication middleware
///
/// # Returns
///
/// The downstream response, or `AppError::Unauthorized` when the cookie is
/// absent or its token does not verify.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar.get(TOKEN_COOKIE).map(|c| c.value().to_string()).ok_or_else(|| {
        tracing::debug!("No session cookie on {}", request.uri().path());
        AppError::auth_required()
    })?;

    let user_id = state.tokens.verify(&token).map_err(|e| {
        tracing::warn!("Invalid session token: {}", e);
        AppError::auth_required()
    })?;

    request.extensions_mut().insert(Identity(user_id));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Identity>().cloned().ok_or_else(|| {
            tracing::warn!("Identity not found in request extensions");
            AppError::auth_required()
        })
    }
}
