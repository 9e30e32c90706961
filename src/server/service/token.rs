//! Access token issuance and verification.
//!
//! Tokens are HS256 JWTs whose `sub` claim is the user id. The signing keys are derived
//! once from the configured secret and shared behind an `Arc`.

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a string.
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
    expire_minutes: i64,
}

impl TokenService {
    pub fn new(secret: &str, expire_minutes: i64) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            expire_minutes,
        }
    }

    /// Issues a signed access token for the given user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AppError::InternalError)` - Expiry out of range or signing failed
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = TimeDelta::try_minutes(self.expire_minutes)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Token lifetime of {} minutes is out of range",
                    self.expire_minutes
                ))
            })?;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to sign access token: {}", e)))
    }

    /// Verifies a token's signature and expiry and returns the user id it was issued for.
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(
            token,
            &self.keys.decoding,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        data.claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken(format!("subject '{}' is not a user id", data.claims.sub)))
    }
}
