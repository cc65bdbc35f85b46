// Edge Converter - Couples + Parentage → Graph Edges
//
// Partner edges hang both partners on their anchor (minlen 1). Child edges drop
// from the parents' anchor when the parents are a registered couple, otherwise
// from a single parent (minlen 2).

use super::couple_registry::CoupleRegistry;
use crate::features::graph_builder::domain::{EdgeKind, GraphEdge};
use crate::shared::models::PersonRecord;

pub struct EdgeConverter;

impl EdgeConverter {
    pub fn new() -> Self {
        Self
    }

    /// first → anchor and second → anchor for every couple
    pub fn couple_edges(&self, registry: &CoupleRegistry) -> Vec<GraphEdge> {
        registry
            .iter()
            .flat_map(|couple| {
                [
                    GraphEdge::new(EdgeKind::Partner, couple.first(), couple.anchor_id()),
                    GraphEdge::new(EdgeKind::Partner, couple.second(), couple.anchor_id()),
                ]
            })
            .collect()
    }

    /// Phase 3: at most one parentage edge per record, in input order
    pub fn child_edges(
        &self,
        records: &[PersonRecord],
        registry: &CoupleRegistry,
    ) -> Vec<GraphEdge> {
        records
            .iter()
            .filter_map(|child| self.resolve_parentage(child, registry))
            .collect()
    }

    fn resolve_parentage(
        &self,
        child: &PersonRecord,
        registry: &CoupleRegistry,
    ) -> Option<GraphEdge> {
        let single =
            |parent: &str| GraphEdge::new(EdgeKind::SingleParent, parent, child.id.as_str());
        match (child.father_id.as_deref(), child.mother_id.as_deref()) {
            (Some(father), Some(mother)) => match registry.lookup(father, mother) {
                Some(couple) => Some(GraphEdge::new(
                    EdgeKind::Descent,
                    couple.anchor_id(),
                    child.id.as_str(),
                )),
                // Parents not recorded as married to each other: attach to the
                // father only. The mother gets no edge.
                None => Some(single(father)),
            },
            (Some(father), None) => Some(single(father)),
            (None, Some(mother)) => Some(single(mother)),
            (None, None) => None,
        }
    }
}

impl Default for EdgeConverter {
    fn default() -> Self {
        Self::new()
    }
}
