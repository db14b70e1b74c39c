//! Result presentation contract for the misinformation checker.
//!
//! This module provides:
//! - Request lifecycle controller with last-submission-wins semantics
//! - Score and verdict normalization
//! - Per-tab view projections over one tier-gated result
//! - Fallback tier table for the pricing view

mod controller;
mod score;
mod tiers;
mod views;

pub use controller::*;
pub use score::*;
pub use tiers::fallback_tiers;
pub use views::*;
