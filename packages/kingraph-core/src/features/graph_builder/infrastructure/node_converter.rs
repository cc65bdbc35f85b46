// Node Converter - PersonRecords → Graph Nodes
//
// One person node per record, one anchor node per registered couple.

use super::couple_registry::CoupleRegistry;
use crate::features::graph_builder::domain::GraphNode;
use crate::shared::models::PersonRecord;

pub struct NodeConverter;

impl NodeConverter {
    pub fn new() -> Self {
        Self
    }

    /// Phase 1: person nodes, in input order
    pub fn person_nodes(&self, records: &[PersonRecord]) -> Vec<GraphNode> {
        records.iter().map(GraphNode::person).collect()
    }

    /// Anchor nodes, in couple-registration order
    pub fn anchor_nodes(&self, registry: &CoupleRegistry) -> Vec<GraphNode> {
        registry.iter().map(GraphNode::anchor).collect()
    }
}

impl Default for NodeConverter {
    fn default() -> Self {
        Self::new()
    }
}
