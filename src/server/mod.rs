//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the horse board, including API
//! endpoints, business logic, data access, and infrastructure. The backend uses Axum
//! as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, authentication, and DTO conversion
//! - **Service Layer** (`service/`) - Ownership checks and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Generic CRUD repository plus thin domain repositories
//! - **Model Layer** (`model/`) - Domain models, validated params, list queries, pricing
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, token signer)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Middleware** resolves the bearer token to an active user
//! 3. **Controller** converts DTOs to params (validating them), calls service
//! 4. **Service** fetches records, compares the actor against the owner, delegates to data
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
