//! # Misinformation Checker Client
//!
//! The client-facing slice of a misinformation-detection service: a proxy
//! gateway in front of the external analysis backend, and a presentation
//! controller that owns the request lifecycle and interprets the tier-gated
//! result shape.
//!
//! ## Features
//!
//! - **Proxy Gateway**: forwards analysis requests to the backend and
//!   normalizes every failure mode into a uniform JSON envelope
//! - **Checker Controller**: `Idle -> Submitting -> {Success, Failed}`
//!   lifecycle with last-submission-wins on overlapping submissions
//! - **Tiered Results**: all tier-gated sections are optional; absence is a
//!   rendering decision, never an error
//! - **View Projections**: analysis, evidence, and education tabs derived
//!   from one result object without further I/O
//!
//! ## Architecture
//!
//! ```text
//! Checker Controller → Proxy Gateway (axum) → Analysis Backend (HTTP)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use misinfo_checker::{Config, backend::BackendClient, gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let backend = BackendClient::new(&config.backend, config.request.clone())?;
//!     let state = Arc::new(gateway::GatewayState::new(backend));
//!     let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
//!     axum::serve(listener, gateway::router(state)).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Upstream backend client and wire types.
pub mod backend;
/// Presentation controller, normalization, and view projections.
pub mod checker;
/// Configuration management.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// Proxy gateway routes.
pub mod gateway;

pub use config::Config;
pub use error::{AppError, AppResult};
