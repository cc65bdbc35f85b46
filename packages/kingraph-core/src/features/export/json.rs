//! JSON exporter

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::errors::Result;
use crate::features::graph_builder::FamilyGraph;

/// `{ graph?, nodes, edges, clusters }`
#[derive(Serialize)]
struct JsonDocument<'a> {
    /// Graph-level layout hints
    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<&'a LayoutConfig>,

    #[serde(flatten)]
    family: &'a FamilyGraph,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
    layout: Option<LayoutConfig>,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Include layout hints under a top-level `graph` key
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn export(&self, graph: &FamilyGraph) -> Result<String> {
        let document = JsonDocument {
            graph: self.layout.as_ref(),
            family: graph,
        };
        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }
}
