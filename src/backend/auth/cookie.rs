//! Session cookie construction.
//!
//! The token travels only in an `HttpOnly`, `SameSite=Strict` cookie scoped
//! to `/`. `Secure` is added in production, where the API is served over
//! TLS.

use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::backend::auth::sessions::TOKEN_COOKIE;

/// Cookie carrying a freshly issued token; lives as long as the token
pub fn session_cookie(token: String, ttl: Duration, secure: bool) -> Cookie<'static> {
    let max_age = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);

    Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .secure(secure)
        .max_age(time::Duration::seconds(max_age))
        .build()
}

/// Cookie that makes the browser drop the session cookie
pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build((TOKEN_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .secure(secure)
        .build();
    cookie.make_removal();
    cookie
}
