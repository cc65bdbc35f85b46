// Graph Builder - Main Entry Point
//
// Converts validated PersonRecords → FamilyGraph in four ordered phases:
// 1. Person nodes
// 2. Couple registry → anchor nodes + partner edges
// 3. Child edges (needs the finished registry)
// 4. Couple clusters
//
// Time: O(R + C) for R records and C couples. All state is local to one build.

use ahash::AHashSet;
use tracing::debug;

use super::{
    cluster_builder::ClusterBuilder, couple_registry::CoupleRegistry,
    edge_converter::EdgeConverter, node_converter::NodeConverter,
};
use crate::features::graph_builder::domain::FamilyGraph;
use crate::shared::models::{PersonRecord, RecordField};

// ============================================================
// Graph Builder
// ============================================================

/// Stateless family graph builder
///
/// ## Usage
/// ```text
/// let graph = GraphBuilder::new().build(&records)?;
/// ```
///
/// ## Precondition
/// Ids are unique and non-empty, and every present `Father`/`Mother`/`MarriedTo`
/// resolves to a record in the same input. The record loader's sanitizer
/// guarantees this. Violations fail fast with the offending record id and field;
/// nothing is repaired here.
///
/// Two further checks:
/// - a record naming itself as `Father`, `Mother` or `MarriedTo` is rejected
///   rather than drawn as a self-edge;
/// - no person id may equal a couple's derived anchor or cluster id, so every
///   node id in the output stays unique.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the complete graph description
    pub fn build(&self, records: &[PersonRecord]) -> Result<FamilyGraph, GraphBuilderError> {
        let person_ids = Self::check_preconditions(records)?;

        // Phase 1: person nodes
        let mut nodes = NodeConverter::new().person_nodes(records);

        // Phase 2: couples. Everything after this point reads the registry
        // and never adds to it.
        let registry = CoupleRegistry::from_records(records)?;
        Self::check_derived_ids(&person_ids, &registry)?;
        nodes.extend(NodeConverter::new().anchor_nodes(&registry));

        let edge_converter = EdgeConverter::new();
        let mut edges = edge_converter.couple_edges(&registry);

        // Phase 3: child edges
        edges.extend(edge_converter.child_edges(records, &registry));

        // Phase 4: clusters
        let clusters = ClusterBuilder::new().build_clusters(&registry);

        debug!(
            records = records.len(),
            couples = registry.len(),
            nodes = nodes.len(),
            edges = edges.len(),
            clusters = clusters.len(),
            "family graph built"
        );

        Ok(FamilyGraph {
            nodes,
            edges,
            clusters,
        })
    }

    /// Fail fast on input the loader should have rejected
    fn check_preconditions(
        records: &[PersonRecord],
    ) -> Result<AHashSet<&str>, GraphBuilderError> {
        let mut ids: AHashSet<&str> = AHashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.id.is_empty() {
                return Err(GraphBuilderError::EmptyId { index });
            }
            if !ids.insert(record.id.as_str()) {
                return Err(GraphBuilderError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }

        for record in records {
            for (field, target) in record.references() {
                if target == record.id {
                    return Err(GraphBuilderError::SelfReference {
                        record_id: record.id.clone(),
                        field,
                    });
                }
                if !ids.contains(target) {
                    return Err(GraphBuilderError::DanglingReference {
                        record_id: record.id.clone(),
                        field,
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(ids)
    }

    /// Anchor and cluster ids must not shadow a person id
    fn check_derived_ids(
        person_ids: &AHashSet<&str>,
        registry: &CoupleRegistry,
    ) -> Result<(), GraphBuilderError> {
        for couple in registry.iter() {
            let key = couple.key();
            if let Some(id) = key
                .derived_ids()
                .into_iter()
                .find(|id| person_ids.contains(id.as_str()))
            {
                return Err(GraphBuilderError::DerivedIdCollision {
                    id,
                    couple: key.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ============================================================
// Error Types
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphBuilderError {
    #[error("Record #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("Duplicate person id '{id}'")]
    DuplicateId { id: String },

    #[error("Person '{record_id}' references {field} '{target}' which doesn't exist")]
    DanglingReference {
        record_id: String,
        field: RecordField,
        target: String,
    },

    #[error("Person '{record_id}' references itself as {field}")]
    SelfReference {
        record_id: String,
        field: RecordField,
    },

    #[error("Person id '{id}' collides with the derived id of couple {couple}")]
    DerivedIdCollision { id: String, couple: String },
}

// ============================================================
// Tests
// ============================================================
