//! Export - handoff to the external layout engine
//!
//! - JSON: `{ nodes, edges, clusters }` for dagre-style consumers
//! - DOT: Graphviz compound graph with `minlen` edges and borderless clusters

mod dot;
mod json;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use dot::DotExporter;
pub use json::JsonExporter;

use crate::config::LayoutConfig;
use crate::errors::Result;
use crate::features::graph_builder::FamilyGraph;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Dot,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Dot => "dot",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "dot" | "gv" => Ok(ExportFormat::Dot),
            _ => Err(format!("Unknown export format '{}'. Valid formats: json, dot", s)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `graph` in `format`
pub fn export(graph: &FamilyGraph, format: ExportFormat, layout: &LayoutConfig) -> Result<String> {
    match format {
        ExportFormat::Json => JsonExporter::new()
            .pretty(true)
            .with_layout(*layout)
            .export(graph),
        ExportFormat::Dot => Ok(DotExporter::new(*layout).export(graph)),
    }
}
