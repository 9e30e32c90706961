//! Server configuration read from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | composed from `POSTGRES_USER`, `POSTGRES_PASSWORD`, `POSTGRES_SERVER`, `POSTGRES_PORT`, `POSTGRES_DB` |
//! | `SECRET_KEY` | required |
//! | `ACCESS_TOKEN_EXPIRE_MINUTES` | 11520 (8 days), between 1 and 525600 (one year) |
//! | `BIND_ADDRESS` | `0.0.0.0:8000` |

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 8;
const MAX_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 365;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

#[derive(Debug)]
pub struct Config {
    pub database_url: String,

    /// HMAC secret used to sign access tokens.
    pub secret_key: String,
    pub access_token_expire_minutes: i64,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `SECRET_KEY` is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - Token lifetime is not a whole number
    ///   of minutes between 1 and one year
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let env_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                env_or("POSTGRES_USER", "postgres"),
                env_or("POSTGRES_PASSWORD", "postgres"),
                env_or("POSTGRES_SERVER", "localhost"),
                env_or("POSTGRES_PORT", "5432"),
                env_or("POSTGRES_DB", "horse_board"),
            ),
        };

        let secret_key = lookup("SECRET_KEY")
            .ok_or_else(|| ConfigError::MissingEnvVar("SECRET_KEY".to_string()))?;

        let access_token_expire_minutes = match lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Some(value) => parse_expire_minutes(value)?,
            None => DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
        };

        Ok(Self {
            database_url,
            secret_key,
            access_token_expire_minutes,
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
        })
    }
}

fn parse_expire_minutes(value: String) -> Result<i64, ConfigError> {
    match value.trim().parse::<i64>() {
        Ok(minutes) if (1..=MAX_ACCESS_TOKEN_EXPIRE_MINUTES).contains(&minutes) => Ok(minutes),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "ACCESS_TOKEN_EXPIRE_MINUTES".to_string(),
            value,
        }),
    }
}
