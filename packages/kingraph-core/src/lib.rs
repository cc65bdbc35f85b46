/*
 * Kingraph Core - Genealogy to Layered Graph
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (PersonRecord, RecordField)
 * - features/    : Vertical slices (record_loader → graph_builder → export)
 * - config/      : Versioned YAML configuration
 *
 * The graph builder is pure: it owns all intermediate state for one build
 * and never touches I/O. Loading, reference cleanup and export sit around it.
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules (record_loader, graph_builder, export)
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{KinshipError, Result};
pub use features::graph_builder::{
    Cluster, Couple, CoupleKey, FamilyGraph, GraphBuilder, GraphBuilderError, GraphBuilderUseCase,
    GraphBuilderUseCaseImpl, GraphEdge, GraphNode, GraphStats,
};
pub use shared::models::{PersonRecord, RecordField};
