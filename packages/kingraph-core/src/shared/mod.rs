//! Shared module - Common types and utilities
//!
//! This module contains types that are shared across all features.
//! It has no I/O and no feature dependencies.

pub mod models;

// Re-exports for convenience
pub use models::*;
