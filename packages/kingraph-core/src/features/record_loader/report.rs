//! Sanitizer findings

use serde::Serialize;
use std::fmt;

use crate::shared::models::RecordField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Reference to an id that is not in the input
    Dangling,
    /// Person listed as their own parent or spouse
    SelfReference,
    /// Id already used by an earlier record
    DuplicateId,
    /// Marriage whose derived anchor or cluster id equals a person id
    DerivedIdCollision,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Dangling => "dangling",
            IssueKind::SelfReference => "self_reference",
            IssueKind::DuplicateId => "duplicate_id",
            IssueKind::DerivedIdCollision => "derived_id_collision",
        }
    }
}

/// One problem found (and, outside strict mode, repaired) in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceIssue {
    pub record_id: String,
    /// Offending column; `None` for duplicate ids
    pub field: Option<RecordField>,
    pub target: Option<String>,
    pub kind: IssueKind,
}

impl ReferenceIssue {
    pub fn dangling(record_id: &str, field: RecordField, target: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            field: Some(field),
            target: Some(target.to_string()),
            kind: IssueKind::Dangling,
        }
    }

    pub fn self_reference(record_id: &str, field: RecordField) -> Self {
        Self {
            record_id: record_id.to_string(),
            field: Some(field),
            target: Some(record_id.to_string()),
            kind: IssueKind::SelfReference,
        }
    }

    pub fn duplicate_id(record_id: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            field: None,
            target: None,
            kind: IssueKind::DuplicateId,
        }
    }

    pub fn derived_id_collision(record_id: &str, spouse_id: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            field: Some(RecordField::MarriedTo),
            target: Some(spouse_id.to_string()),
            kind: IssueKind::DerivedIdCollision,
        }
    }
}

impl fmt::Display for ReferenceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.map(|f| f.as_str()).unwrap_or("ID");
        match self.kind {
            IssueKind::Dangling => write!(
                f,
                "Person {} references {} '{}' which doesn't exist",
                self.record_id,
                field,
                self.target.as_deref().unwrap_or("")
            ),
            IssueKind::SelfReference => {
                write!(f, "Person {} references itself as {}", self.record_id, field)
            }
            IssueKind::DuplicateId => write!(
                f,
                "Person {} appears more than once; keeping the first record",
                self.record_id
            ),
            IssueKind::DerivedIdCollision => write!(
                f,
                "Person {} is married to '{}' but the couple's id is already a person id",
                self.record_id,
                self.target.as_deref().unwrap_or("")
            ),
        }
    }
}

/// Everything the sanitizer changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SanitizeReport {
    /// Rows dropped for having no id
    pub dropped_empty_ids: usize,
    pub issues: Vec<ReferenceIssue>,
}

impl SanitizeReport {
    pub fn is_clean(&self) -> bool {
        self.dropped_empty_ids == 0 && self.issues.is_empty()
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }

    pub fn issues_for<'a>(
        &'a self,
        record_id: &'a str,
    ) -> impl Iterator<Item = &'a ReferenceIssue> + 'a {
        self.issues.iter().filter(move |i| i.record_id == record_id)
    }
}

impl fmt::Display for SanitizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "No issues found.");
        }
        if self.dropped_empty_ids > 0 {
            writeln!(f, "Dropped {} row(s) without an ID.", self.dropped_empty_ids)?;
        }
        for issue in &self.issues {
            writeln!(f, "[{}] {}", issue.kind.as_str(), issue)?;
        }
        Ok(())
    }
}
