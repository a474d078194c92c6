//! leguichet - HTTP JSON API
//!
//! *Le Guichet* (The Counter) - Axum-based HTTP server exposing farm
//! record CRUD and the advisory endpoint for LeChamp.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// API error types
pub mod error;

/// HTTP handlers for REST endpoints
pub mod handlers;

/// Server configuration from the environment
pub mod config;

/// OpenAPI schema for the API surface
pub mod openapi;

/// API response types
pub mod responses;

/// Server instance management
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::GuichetServer;
