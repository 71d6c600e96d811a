/**
 * Session Tokens
 *
 * HS256 JWTs carrying the user id as `_id`, plus `iat` and `exp`.
 * Verification rejects bad signatures, malformed tokens, expired tokens
 * and ids that are not valid `ObjectId`s. Tokens are stateless: nothing
 * is stored server-side, so a token stays valid until it expires even
 * after the cookie holding it is cleared.
 */

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::{ObjectId, SharedError};

/// Name of the cookie holding the token
pub const TOKEN_COOKIE: &str = "jwt";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    #[serde(rename = "_id")]
    pub id: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Why a token was rejected
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token rejected: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
    #[error("token subject rejected: {0}")]
    Subject(#[from] SharedError),
}

/// Signing and verification keys plus the token lifetime
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

impl TokenKeys {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Lifetime of issued tokens; also used as the cookie max-age
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a JWT token for a user
    pub fn issue(&self, user_id: &ObjectId) -> Result<String, TokenError> {
        let iat = now_secs();
        let claims = Claims {
            id: user_id.to_string(),
            iat,
            exp: iat + self.ttl.as_secs(),
        };
        self.sign(&claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        Ok(encode(&Header::default(), claims, &self.encoding)?)
    }

    /// Verify a token and return the identity it carries
    pub fn verify(&self, token: &str) -> Result<ObjectId, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(ObjectId::parse(&data.claims.id)?)
    }
}
