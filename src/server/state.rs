//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned into each request handler
//! through Axum's state extraction. It holds the database pool and the token service
//! used to issue and verify bearer tokens.

use sea_orm::DatabaseConnection;

use super::service::token::TokenService;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `TokenService` keeps its keys behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs access tokens at login and verifies them on guarded routes.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
