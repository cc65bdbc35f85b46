// Graph Builder Infrastructure

pub mod builder;
pub mod cluster_builder;
pub mod couple_registry;
pub mod edge_converter;
pub mod node_converter;

pub use builder::{GraphBuilder, GraphBuilderError};
pub use couple_registry::CoupleRegistry;
