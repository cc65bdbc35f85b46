//! Feature modules
//!
//! - record_loader: CSV ingestion + reference cleanup
//! - graph_builder: records → nodes, minlen edges, couple clusters
//! - export: JSON / DOT handoff to the layout engine

pub mod export;
pub mod graph_builder;
pub mod record_loader;
