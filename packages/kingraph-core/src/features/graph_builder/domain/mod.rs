// Graph Builder Domain Models
//
// Pure domain models with zero I/O (hexagonal architecture).
// Everything here is created once per build and never mutated afterwards.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::shared::models::PersonRecord;

// ============================================================
// Node Style Classes
// ============================================================

/// Style tag the renderer keys its CSS/attributes on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    /// Person with gender `"F"`
    Woman,
    /// Person with any other non-empty gender
    Man,
    /// Person without a gender
    Unknown,
    /// Invisible couple anchor
    MarriageAnchor,
}

impl NodeClass {
    /// Classify a person by gender
    ///
    /// Binary fallback: every present value other than `"F"` folds into
    /// [`NodeClass::Man`]. Absent or empty gender is [`NodeClass::Unknown`].
    pub fn from_gender(gender: Option<&str>) -> Self {
        match gender {
            None | Some("") => NodeClass::Unknown,
            Some("F") => NodeClass::Woman,
            Some(_) => NodeClass::Man,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeClass::Woman => "person person-woman",
            NodeClass::Man => "person person-man",
            NodeClass::Unknown => "person person-na",
            NodeClass::MarriageAnchor => "marriage-minimal",
        }
    }

    #[inline]
    pub fn is_person(&self) -> bool {
        !matches!(self, NodeClass::MarriageAnchor)
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================
// Graph Node
// ============================================================

/// Node handed to the layout engine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Person id, or the derived anchor id
    pub id: String,

    /// Display label (empty for anchors)
    pub label: String,

    pub style_class: NodeClass,

    /// Originating record, present on person nodes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PersonRecord>,
}

impl GraphNode {
    /// Person node for `record`
    pub fn person(record: &PersonRecord) -> Self {
        Self {
            id: record.id.clone(),
            label: record.name.clone(),
            style_class: NodeClass::from_gender(record.gender.as_deref()),
            data: Some(record.clone()),
        }
    }

    /// Label-less anchor node for `couple`
    pub fn anchor(couple: &Couple) -> Self {
        Self {
            id: couple.anchor_id().to_string(),
            label: String::new(),
            style_class: NodeClass::MarriageAnchor,
            data: None,
        }
    }

    #[inline]
    pub fn is_person(&self) -> bool {
        self.style_class.is_person()
    }

    #[inline]
    pub fn is_anchor(&self) -> bool {
        self.style_class == NodeClass::MarriageAnchor
    }
}

// ============================================================
// Graph Edge
// ============================================================

/// Structural relationship kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Partner → marriage anchor
    Partner,
    /// Marriage anchor → child
    Descent,
    /// Single known (or unmarried) parent → child
    SingleParent,
}

impl EdgeKind {
    /// Minimum rank separation the layout engine must honour
    pub fn minlen(&self) -> u32 {
        match self {
            EdgeKind::Partner => 1,
            EdgeKind::Descent | EdgeKind::SingleParent => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Partner => "partner",
            EdgeKind::Descent => "descent",
            EdgeKind::SingleParent => "single_parent",
        }
    }
}

/// Directed edge with a minimum rank distance hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub minlen: u32,
    pub kind: EdgeKind,
}

impl GraphEdge {
    pub fn new(kind: EdgeKind, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            minlen: kind.minlen(),
            kind,
        }
    }
}

// ============================================================
// Couples
// ============================================================

/// Unordered pair of two distinct person ids
///
/// Stored in canonical (byte-wise lexicographic) order, so
/// `CoupleKey::new("B", "A") == CoupleKey::new("A", "B")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoupleKey {
    first: String,
    second: String,
}

impl CoupleKey {
    /// Canonical key for `a` and `b`; `None` when both are the same id
    pub fn new(a: &str, b: &str) -> Option<Self> {
        match a.cmp(b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a.to_string(),
                second: b.to_string(),
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b.to_string(),
                second: a.to_string(),
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// Derived marriage anchor id
    pub fn anchor_id(&self) -> String {
        format!("M{self}")
    }

    /// Derived cluster id
    pub fn cluster_id(&self) -> String {
        format!("couple{self}")
    }

    /// Anchor and cluster id, the ids this couple adds to the graph
    pub fn derived_ids(&self) -> [String; 2] {
        [self.anchor_id(), self.cluster_id()]
    }
}

/// `(first,second)` with `\`, `,`, `(` and `)` backslash-escaped in each member,
/// so distinct keys never render alike
impl fmt::Display for CoupleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_escaped(f, &self.first)?;
        f.write_str(",")?;
        write_escaped(f, &self.second)?;
        f.write_str(")")
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, id: &str) -> fmt::Result {
    for ch in id.chars() {
        if matches!(ch, '\\' | ',' | '(' | ')') {
            f.write_str("\\")?;
        }
        write!(f, "{ch}")?;
    }
    Ok(())
}

/// A married pair, registered once per canonical key
///
/// `first`/`second` are the canonical order only, not father/mother.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Couple {
    key: CoupleKey,
    anchor_id: String,
}

impl Couple {
    pub fn new(key: CoupleKey) -> Self {
        let anchor_id = key.anchor_id();
        Self { key, anchor_id }
    }

    pub fn key(&self) -> &CoupleKey {
        &self.key
    }

    pub fn first(&self) -> &str {
        self.key.first()
    }

    pub fn second(&self) -> &str {
        self.key.second()
    }

    pub fn anchor_id(&self) -> &str {
        &self.anchor_id
    }

    pub fn cluster_id(&self) -> String {
        self.key.cluster_id()
    }
}

// ============================================================
// Clusters
// ============================================================

/// Node group rendered as one borderless, label-less compound unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub cluster_id: String,
    pub member_node_ids: Vec<String>,
}

impl Cluster {
    /// Cluster of a couple's two members and its anchor
    pub fn for_couple(couple: &Couple) -> Self {
        Self {
            cluster_id: couple.cluster_id(),
            member_node_ids: vec![
                couple.first().to_string(),
                couple.second().to_string(),
                couple.anchor_id().to_string(),
            ],
        }
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.member_node_ids.iter().any(|id| id == node_id)
    }
}

// ============================================================
// Family Graph (build output)
// ============================================================

/// Complete graph description for the layout engine
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FamilyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub clusters: Vec<Cluster>,
}

impl FamilyGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges pointing at `target`
    pub fn edges_into<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| e.target == target)
    }

    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |e| e.kind == kind)
    }

    pub fn anchors(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.is_anchor())
    }

    /// Edges whose endpoints are missing from `nodes`
    ///
    /// Always empty for a graph built from validated records.
    pub fn dangling_edges(&self) -> Vec<&GraphEdge> {
        let ids: ahash::AHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .filter(|e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
            .collect()
    }

    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            clusters: self.clusters.len(),
            ..Default::default()
        };
        for node in &self.nodes {
            if node.is_person() {
                stats.persons += 1;
            } else {
                stats.couples += 1;
            }
        }
        for edge in &self.edges {
            match edge.kind {
                EdgeKind::Partner => stats.partner_edges += 1,
                EdgeKind::Descent => stats.descent_edges += 1,
                EdgeKind::SingleParent => stats.single_parent_edges += 1,
            }
        }
        stats
    }
}

// ============================================================
// Statistics
// ============================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub persons: usize,
    pub couples: usize,
    pub partner_edges: usize,
    pub descent_edges: usize,
    pub single_parent_edges: usize,
    pub clusters: usize,
}

impl GraphStats {
    pub fn total_edges(&self) -> usize {
        self.partner_edges + self.descent_edges + self.single_parent_edges
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} persons, {} couples, {} edges ({} partner, {} descent, {} single-parent), {} clusters",
            self.persons,
            self.couples,
            self.total_edges(),
            self.partner_edges,
            self.descent_edges,
            self.single_parent_edges,
            self.clusters
        )
    }
}
