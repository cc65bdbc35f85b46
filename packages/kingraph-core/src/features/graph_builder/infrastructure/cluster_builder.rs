// Cluster Builder - one compound group per couple
//
// A person married more than once appears in several clusters, one per
// partner. Clusters are never merged.

use tracing::debug;

use super::couple_registry::CoupleRegistry;
use crate::features::graph_builder::domain::Cluster;

pub struct ClusterBuilder;

impl ClusterBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Phase 4: clusters in couple-registration order
    pub fn build_clusters(&self, registry: &CoupleRegistry) -> Vec<Cluster> {
        let clusters: Vec<Cluster> = registry.iter().map(Cluster::for_couple).collect();
        debug!(clusters = clusters.len(), "couple clusters assembled");
        clusters
    }
}

impl Default for ClusterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
