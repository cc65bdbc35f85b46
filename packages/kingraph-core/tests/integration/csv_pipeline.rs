//! CSV → sanitize → build, end to end

#[path = "../common/mod.rs"]
mod common;

use common::*;
use kingraph_core::config::LoaderConfig;
use kingraph_core::features::graph_builder::{EdgeKind, NodeClass};
use kingraph_core::features::record_loader::{CsvRecordLoader, IssueKind};
use kingraph_core::{GraphBuilderUseCase, GraphBuilderUseCaseImpl, KinshipError};
use pretty_assertions::assert_eq;

fn assert_fixture_graph(result: &kingraph_core::features::graph_builder::GraphBuildResult) {
    let graph = &result.graph;

    // 9 persons + 2 anchors; 4 partner + 3 descent + 2 single-parent edges
    assert_counts(graph, 11, 9, 2);
    assert_no_dangling_edges(graph);

    assert_single_parent_edge(graph, "P1", "M(G1,G2)", EdgeKind::Descent);
    assert_single_parent_edge(graph, "P3", "M(G1,G2)", EdgeKind::Descent);
    assert_single_parent_edge(graph, "C1", "M(P1,P2)", EdgeKind::Descent);
    // X1 and P3 never married: father only
    assert_single_parent_edge(graph, "C2", "X1", EdgeKind::SingleParent);
    // GHOST mother dropped
    assert_single_parent_edge(graph, "C3", "P1", EdgeKind::SingleParent);
    assert_no_parent_edge(graph, "G1");

    assert_eq!(result.report.count(IssueKind::Dangling), 1);
    assert_eq!(result.stats.couples, 2);
    assert_eq!(result.stats.persons, 9);
}

#[test]
fn test_fixture_file_pipeline() {
    let result = GraphBuilderUseCaseImpl::default()
        .build_from_csv(&fixture_path("family.csv"))
        .unwrap();

    assert_fixture_graph(&result);
}

#[test]
fn test_temp_csv_pipeline() {
    let file = write_temp_csv(fixture_family_csv());

    let result = GraphBuilderUseCaseImpl::default()
        .build_from_csv(file.path())
        .unwrap();

    assert_fixture_graph(&result);
}

#[test]
fn test_fixture_node_order_and_classes() {
    let records = CsvRecordLoader::new()
        .load_reader(fixture_family_csv().as_bytes())
        .unwrap();
    let result = GraphBuilderUseCaseImpl::default().build_graph(records).unwrap();

    let ids: Vec<&str> = result.graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["G1", "G2", "P1", "P2", "P3", "X1", "C1", "C2", "C3", "M(G1,G2)", "M(P1,P2)"]
    );

    let class_of = |id: &str| result.graph.node(id).map(|n| n.style_class);
    assert_eq!(class_of("G2"), Some(NodeClass::Woman));
    assert_eq!(class_of("G1"), Some(NodeClass::Man));
    assert_eq!(class_of("C2"), Some(NodeClass::Unknown));
    assert_eq!(class_of("M(P1,P2)"), Some(NodeClass::MarriageAnchor));

    let clara = result.graph.node("C1").and_then(|n| n.data.as_ref()).unwrap();
    assert_eq!(clara.metadata.as_deref(), Some("Teacher"));
}

#[test]
fn test_strict_pipeline_fails_on_fixture() {
    let file = write_temp_csv(fixture_family_csv());

    let err = GraphBuilderUseCaseImpl::new(LoaderConfig { strict: true })
        .build_from_csv(file.path())
        .unwrap_err();

    match err {
        KinshipError::Validation(issue) => {
            assert_eq!(issue.record_id, "C3");
            assert_eq!(issue.target.as_deref(), Some("GHOST"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_semicolon_csv_pipeline() {
    let file = write_temp_csv(
        "ID;Name;Gender;Father;Mother;MarriedTo\nA;Ann;F;;;B\nB;Bob;M;;;\nC;Cy;;B;A;\n",
    );

    let result = GraphBuilderUseCaseImpl::default()
        .with_loader(CsvRecordLoader::new().with_delimiter(b';'))
        .build_from_csv(file.path())
        .unwrap();

    assert_counts(&result.graph, 4, 3, 1);
    assert_single_parent_edge(&result.graph, "C", "M(A,B)", EdgeKind::Descent);
    assert!(result.report.is_clean());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = GraphBuilderUseCaseImpl::default()
        .build_from_csv(&fixture_path("does-not-exist.csv"))
        .unwrap_err();

    assert!(matches!(err, KinshipError::Io(_)));
}
