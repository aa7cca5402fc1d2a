//! HTTP backend for the dayboard dashboard.
//!
//! This crate provides the dayboard server that handles:
//! - The OAuth consent hand-off (`/api/schedule/auth-url` and `/auth/callback`)
//! - The schedule endpoint the dashboard polls (`/api/schedule`)
//! - CORS for the credentialed cross-origin dashboard
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use dayboard_providers::StaticProvider;
//! use dayboard_server::{AppState, ServerConfig, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let provider = Arc::new(StaticProvider::new("demo"));
//!     let router = app(AppState::new(provider, &config.dashboard_url));
//!
//!     let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod routes;
mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorResponse, ServerError, ServerResult};
pub use routes::app;
pub use state::AppState;
