//! DOT exporter
//!
//! Emits a Graphviz compound graph. Couples become `cluster_` subgraphs with
//! no visible border or label, anchors become label-less points, and every
//! edge carries its `minlen`. Separations are configured in points and
//! written in inches, the unit Graphviz expects.
//!
//! A remarried person is listed in every one of their couples' subgraphs.
//! Graphviz places a node in a single cluster, so it warns and keeps the
//! person in only one of them; the JSON export keeps every membership.

use crate::config::LayoutConfig;
use crate::features::graph_builder::{FamilyGraph, GraphNode};

const POINTS_PER_INCH: f64 = 72.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct DotExporter {
    layout: LayoutConfig,
}

impl DotExporter {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    pub fn export(&self, graph: &FamilyGraph) -> String {
        let mut out = String::from("digraph family {\n");
        out.push_str(&format!(
            "  graph [compound=true, rankdir={}, ranksep=\"{:.2}\", nodesep=\"{:.2}\"];\n",
            self.layout.rankdir,
            points_to_inches(self.layout.ranksep),
            points_to_inches(self.layout.nodesep),
        ));

        for node in &graph.nodes {
            out.push_str(&node_statement(node));
        }

        for cluster in &graph.clusters {
            out.push_str(&format!(
                "  subgraph {} {{\n    graph [label=\"\", style=invis];\n",
                quote(&format!("cluster_{}", cluster.cluster_id))
            ));
            for member in &cluster.member_node_ids {
                out.push_str(&format!("    {};\n", quote(member)));
            }
            out.push_str("  }\n");
        }

        for edge in &graph.edges {
            out.push_str(&format!(
                "  {} -> {} [minlen={}, arrowhead=none];\n",
                quote(&edge.source),
                quote(&edge.target),
                edge.minlen
            ));
        }

        out.push_str("}\n");
        out
    }
}

fn node_statement(node: &GraphNode) -> String {
    if node.is_anchor() {
        format!(
            "  {} [label=\"\", class={}, shape=point, width=0.05];\n",
            quote(&node.id),
            quote(node.style_class.as_str())
        )
    } else {
        format!(
            "  {} [label={}, class={}];\n",
            quote(&node.id),
            quote(&node.label),
            quote(node.style_class.as_str())
        )
    }
}

fn points_to_inches(points: u32) -> f64 {
    f64::from(points) / POINTS_PER_INCH
}

/// Quoted DOT identifier
fn quote(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for ch in raw.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
