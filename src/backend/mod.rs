//! Upstream analysis backend client and wire types.
//!
//! This module provides:
//! - HTTP client for the external analysis service
//! - Request/response types for the tier-gated analysis contract

mod client;
mod types;

pub use client::*;
pub use types::*;
