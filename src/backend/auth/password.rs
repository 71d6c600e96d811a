/**
 * Password Hashing
 *
 * bcrypt with a configurable cost. Both operations are CPU bound, so they
 * run on tokio's blocking pool instead of stalling a runtime worker.
 */
use bcrypt::{hash, verify};

use crate::backend::error::{AppError, AppResult};

/// Hash a plain-text password
///
/// # Errors
///
/// `AppError::Internal` if bcrypt rejects the cost or the blocking task
/// panics.
pub async fn hash_password(password: String, cost: u32) -> AppResult<String> {
    tokio::task::spawn_blocking(move || hash(password, cost))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// Check a plain-text password against a stored hash
///
/// Returns `Ok(false)` on mismatch; a malformed stored hash is an internal
/// error.
pub async fn verify_password(password: String, password_hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || verify(password, &password_hash))
        .await
        .map_err(|e| AppError::internal(format!("Password check task failed: {}", e)))?
        .map_err(|e| AppError::internal(format!("Failed to verify password: {}", e)))
}
