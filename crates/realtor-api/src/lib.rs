//! Axum HTTP API server for the Realtor marketplace.
//!
//! This crate provides:
//! - Bearer-token verification and role-gated access control
//! - Lifecycle handlers for listings and offers
//! - Rate limiting and security headers

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod roles;
pub mod routes;
pub mod security;
pub mod state;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use roles::RoleService;
pub use routes::create_router;
pub use state::AppState;
