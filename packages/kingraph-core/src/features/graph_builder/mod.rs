// Graph Builder - Genealogy Records to Layered Graph
//
// Converts validated PersonRecords → FamilyGraph (nodes, edges, clusters):
//
// ## Architecture
// - Domain: Pure models (GraphNode, GraphEdge, CoupleKey, Couple, Cluster)
// - Infrastructure: Builder implementation with 4 ordered phases
// - Application: Use case (sanitize → build)

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::{GraphBuildResult, GraphBuilderUseCase, GraphBuilderUseCaseImpl};

// Re-exports
pub use domain::{
    Cluster, Couple, CoupleKey, EdgeKind, FamilyGraph, GraphEdge, GraphNode, GraphStats, NodeClass,
};

pub use infrastructure::{GraphBuilder, GraphBuilderError};
