//! Shape of the exported graph as seen by a layout engine

#[path = "../common/mod.rs"]
mod common;

use common::*;
use kingraph_core::config::{LayoutConfig, RankDir};
use kingraph_core::features::export::{export, ExportFormat, JsonExporter};
use kingraph_core::{FamilyGraph, GraphBuilder, PersonRecord};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn small_family() -> FamilyGraph {
    let records = FamilyBuilder::new()
        .record(PersonRecord::new("A").with_name("Adam").with_gender("M").with_spouse("B"))
        .record(
            PersonRecord::new("B")
                .with_name("Beth")
                .with_gender("F")
                .with_dates("1902", "1980")
                .with_metadata("Midwife")
                .with_spouse("A"),
        )
        .child("C", "A", "B")
        .build();
    GraphBuilder::new().build(&records).unwrap()
}

fn to_value(graph: &FamilyGraph) -> Value {
    let json = JsonExporter::new().export(graph).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_json_top_level_keys() {
    let value = to_value(&small_family());
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["clusters", "edges", "nodes"]);
}

#[test]
fn test_json_person_node() {
    let value = to_value(&small_family());

    assert_eq!(
        value["nodes"][1],
        json!({
            "id": "B",
            "label": "Beth",
            "styleClass": "person person-woman",
            "data": {
                "ID": "B",
                "Name": "Beth",
                "Gender": "F",
                "Birth": "1902",
                "Death": "1980",
                "Metadata": "Midwife",
                "MarriedTo": "A"
            }
        })
    );
}

#[test]
fn test_json_anchor_node_has_no_data() {
    let value = to_value(&small_family());

    assert_eq!(
        value["nodes"][3],
        json!({ "id": "M(A,B)", "label": "", "styleClass": "marriage-minimal" })
    );
}

#[test]
fn test_json_edges_and_clusters() {
    let value = to_value(&small_family());

    assert_eq!(
        value["edges"],
        json!([
            { "source": "A", "target": "M(A,B)", "minlen": 1, "kind": "partner" },
            { "source": "B", "target": "M(A,B)", "minlen": 1, "kind": "partner" },
            { "source": "M(A,B)", "target": "C", "minlen": 2, "kind": "descent" }
        ])
    );
    assert_eq!(
        value["clusters"],
        json!([{ "clusterId": "couple(A,B)", "memberNodeIds": ["A", "B", "M(A,B)"] }])
    );
}

#[test]
fn test_json_layout_hints() {
    let layout = LayoutConfig {
        rankdir: RankDir::LR,
        ..LayoutConfig::default()
    };

    let json = export(&small_family(), ExportFormat::Json, &layout).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value["graph"],
        json!({ "rankdir": "LR", "ranksep": 50, "nodesep": 20, "edgesep": 30 })
    );
    assert_eq!(value["nodes"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_dot_contract() {
    let dot = export(&small_family(), ExportFormat::Dot, &LayoutConfig::default()).unwrap();

    assert!(dot.starts_with("digraph family {\n"));
    assert!(dot.contains("compound=true"));
    assert!(dot.contains("\"B\" [label=\"Beth\", class=\"person person-woman\"];"));
    assert!(dot.contains("subgraph \"cluster_couple(A,B)\" {"));
    assert!(dot.contains("graph [label=\"\", style=invis];"));
    assert!(dot.contains("\"M(A,B)\" -> \"C\" [minlen=2, arrowhead=none];"));
    assert_eq!(dot.matches(" -> ").count(), 3);
}

#[test]
fn test_empty_graph_exports() {
    let graph = GraphBuilder::new().build(&[]).unwrap();

    assert_eq!(to_value(&graph), json!({ "nodes": [], "edges": [], "clusters": [] }));
    let dot = export(&graph, ExportFormat::Dot, &LayoutConfig::default()).unwrap();
    assert!(!dot.contains("->"));
}
