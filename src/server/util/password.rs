//! bcrypt hashing on the blocking thread pool.

use crate::server::error::AppError;

#[cfg(not(test))]
const HASH_COST: u32 = bcrypt::DEFAULT_COST;
#[cfg(test)]
const HASH_COST: u32 = 4;

pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(AppError::from)
}

/// Checks a plaintext password against a stored bcrypt hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError)` - Stored hash is malformed or the blocking task panicked
pub async fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let hashed_password = hashed_password.to_string();

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed_password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))?
        .map_err(AppError::from)
}
