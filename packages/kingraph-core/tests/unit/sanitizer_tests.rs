//! Sanitizer behaviour on dirty record sets

#[path = "../common/mod.rs"]
mod common;

use common::*;
use kingraph_core::features::graph_builder::EdgeKind;
use kingraph_core::features::record_loader::{IssueKind, RecordSanitizer};
use kingraph_core::{GraphBuilder, GraphBuilderError, KinshipError, PersonRecord, RecordField};
use pretty_assertions::assert_eq;

#[test]
fn test_sanitized_output_always_builds() {
    let records = FamilyBuilder::new()
        .married("A", "B")
        .child("C", "A", "GHOST")
        .record(PersonRecord::new("D").with_spouse("D"))
        .record(PersonRecord::new("A").with_name("Duplicate"))
        .record(PersonRecord::new(""))
        .build();

    // Raw input violates the builder's preconditions
    assert!(GraphBuilder::new().build(&records).is_err());

    let outcome = RecordSanitizer::default().sanitize(records).unwrap();
    let graph = GraphBuilder::new().build(&outcome.records).unwrap();

    assert_no_dangling_edges(&graph);
    assert_single_parent_edge(&graph, "C", "A", EdgeKind::SingleParent);
    assert_eq!(outcome.report.dropped_empty_ids, 1);
    assert_eq!(outcome.report.count(IssueKind::Dangling), 1);
    assert_eq!(outcome.report.count(IssueKind::SelfReference), 1);
    assert_eq!(outcome.report.count(IssueKind::DuplicateId), 1);
}

fn assert_unique_node_ids(graph: &kingraph_core::FamilyGraph) {
    let mut ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), graph.nodes.len(), "duplicate node ids");
}

#[test]
fn test_comma_ids_keep_couples_apart() {
    let records = vec![
        PersonRecord::new("A,B").with_spouse("C"),
        PersonRecord::new("C"),
        PersonRecord::new("A").with_spouse("B,C"),
        PersonRecord::new("B,C"),
    ];

    let outcome = RecordSanitizer::default().sanitize(records).unwrap();
    assert!(outcome.report.is_clean());

    let graph = GraphBuilder::new().build(&outcome.records).unwrap();

    assert_unique_node_ids(&graph);
    assert_eq!(graph.anchors().count(), 2);
    assert_ne!(graph.clusters[0].cluster_id, graph.clusters[1].cluster_id);
    for anchor in graph.anchors() {
        assert_eq!(graph.edges_into(&anchor.id).count(), 2);
    }
}

#[test]
fn test_person_id_equal_to_anchor_id() {
    let records = vec![
        PersonRecord::new("A").with_spouse("B"),
        PersonRecord::new("B"),
        PersonRecord::new("M(A,B)"),
    ];

    // Unsanitized, the builder refuses to emit two nodes with one id
    assert!(matches!(
        GraphBuilder::new().build(&records),
        Err(GraphBuilderError::DerivedIdCollision { .. })
    ));

    let outcome = RecordSanitizer::default().sanitize(records.clone()).unwrap();
    assert_eq!(outcome.report.count(IssueKind::DerivedIdCollision), 1);

    let graph = GraphBuilder::new().build(&outcome.records).unwrap();
    assert_unique_node_ids(&graph);
    assert_eq!(graph.anchors().count(), 0);
    assert!(graph.node("M(A,B)").is_some_and(|n| n.is_person()));

    let err = RecordSanitizer::strict().sanitize(records).unwrap_err();
    match err {
        KinshipError::Validation(issue) => {
            assert_eq!(issue.kind, IssueKind::DerivedIdCollision);
            assert_eq!(issue.record_id, "A");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_one_sided_dangling_spouse() {
    // B names a spouse that doesn't exist; A's marriage to B survives
    let records = vec![
        PersonRecord::new("A").with_spouse("B"),
        PersonRecord::new("B").with_spouse("Z"),
    ];

    let outcome = RecordSanitizer::default().sanitize(records).unwrap();

    assert_eq!(outcome.records[0].spouse_id.as_deref(), Some("B"));
    assert_eq!(outcome.records[1].spouse_id, None);

    let graph = GraphBuilder::new().build(&outcome.records).unwrap();
    assert_eq!(graph.clusters.len(), 1);
    assert_eq!(graph.clusters[0].cluster_id, "couple(A,B)");
}

#[test]
fn test_issues_are_reported_per_record() {
    let records = vec![
        PersonRecord::new("A"),
        PersonRecord::new("C").with_father("X").with_mother("Y"),
    ];

    let outcome = RecordSanitizer::default().sanitize(records).unwrap();

    let fields: Vec<_> = outcome
        .report
        .issues_for("C")
        .map(|issue| issue.field)
        .collect();
    assert_eq!(fields, vec![Some(RecordField::Father), Some(RecordField::Mother)]);
    assert_eq!(outcome.report.issues_for("A").count(), 0);
}

#[test]
fn test_report_display() {
    let records = vec![PersonRecord::new("C").with_father("Z")];
    let outcome = RecordSanitizer::default().sanitize(records).unwrap();

    assert_eq!(
        outcome.report.to_string(),
        "[dangling] Person C references Father 'Z' which doesn't exist\n"
    );
}

#[test]
fn test_clean_report_display() {
    let records = FamilyBuilder::new().married("A", "B").build();
    let outcome = RecordSanitizer::default().sanitize(records).unwrap();

    assert!(outcome.report.is_clean());
    assert_eq!(outcome.report.to_string(), "No issues found.\n");
}

#[test]
fn test_whitespace_references_are_absent() {
    let mut record = PersonRecord::new(" A ");
    record.father_id = Some("   ".to_string());
    record.spouse_id = Some(String::new());

    let outcome = RecordSanitizer::default().sanitize(vec![record]).unwrap();

    assert!(outcome.report.is_clean());
    assert_eq!(outcome.records[0].id, "A");
    assert_eq!(outcome.records[0].father_id, None);
    assert_eq!(outcome.records[0].spouse_id, None);
}

#[test]
fn test_strict_rejects_duplicates() {
    let records = vec![PersonRecord::new("A"), PersonRecord::new("A")];

    let err = RecordSanitizer::strict().sanitize(records).unwrap_err();

    match err {
        KinshipError::Validation(issue) => assert_eq!(issue.kind, IssueKind::DuplicateId),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_strict_accepts_clean_input() {
    let records = FamilyBuilder::new()
        .married("A", "B")
        .child("C", "A", "B")
        .build();

    let outcome = RecordSanitizer::strict().sanitize(records.clone()).unwrap();

    assert_eq!(outcome.records, records);
}
