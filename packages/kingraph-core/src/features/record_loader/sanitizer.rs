//! Record sanitizer
//!
//! Establishes the graph builder's precondition: non-empty unique ids, and
//! every present reference resolving to another record of the same input.

use ahash::AHashSet;
use tracing::{debug, warn};

use super::report::{ReferenceIssue, SanitizeReport};
use crate::config::LoaderConfig;
use crate::errors::{KinshipError, Result};
use crate::features::graph_builder::CoupleKey;
use crate::shared::models::{PersonRecord, RecordField};

/// Sanitized records plus what was changed to get there
#[derive(Debug, Clone, Default)]
pub struct SanitizeOutcome {
    pub records: Vec<PersonRecord>,
    pub report: SanitizeReport,
}

#[derive(Debug, Clone, Default)]
pub struct RecordSanitizer {
    config: LoaderConfig,
}

impl RecordSanitizer {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Strict sanitizer: the first issue is returned as an error
    pub fn strict() -> Self {
        Self::new(LoaderConfig { strict: true })
    }

    pub fn sanitize(&self, records: Vec<PersonRecord>) -> Result<SanitizeOutcome> {
        let mut report = SanitizeReport::default();

        let mut seen: AHashSet<String> = AHashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for record in records.into_iter().map(PersonRecord::normalized) {
            if record.id.is_empty() {
                report.dropped_empty_ids += 1;
                continue;
            }
            if !seen.insert(record.id.clone()) {
                self.record_issue(&mut report, ReferenceIssue::duplicate_id(&record.id))?;
                continue;
            }
            kept.push(record);
        }

        for record in &mut kept {
            let invalid: Vec<ReferenceIssue> = record
                .references()
                .filter_map(|(field, target)| {
                    if target == record.id {
                        Some(ReferenceIssue::self_reference(&record.id, field))
                    } else if !seen.contains(target) {
                        Some(ReferenceIssue::dangling(&record.id, field, target))
                    } else {
                        None
                    }
                })
                .collect();

            for issue in invalid {
                if let Some(field) = issue.field {
                    record.clear_reference(field);
                }
                self.record_issue(&mut report, issue)?;
            }
        }

        // Marriages whose anchor or cluster id would shadow a person id
        for record in &mut kept {
            let Some(spouse_id) = record.spouse_id.clone() else {
                continue;
            };
            let collides = CoupleKey::new(&record.id, &spouse_id).is_some_and(|key| {
                key.derived_ids()
                    .iter()
                    .any(|id| seen.contains(id.as_str()))
            });
            if collides {
                record.clear_reference(RecordField::MarriedTo);
                let issue = ReferenceIssue::derived_id_collision(&record.id, &spouse_id);
                self.record_issue(&mut report, issue)?;
            }
        }

        debug!(
            records = kept.len(),
            dropped_empty_ids = report.dropped_empty_ids,
            issues = report.issues.len(),
            "records sanitized"
        );

        Ok(SanitizeOutcome {
            records: kept,
            report,
        })
    }

    fn record_issue(&self, report: &mut SanitizeReport, issue: ReferenceIssue) -> Result<()> {
        if self.config.strict {
            return Err(KinshipError::validation(issue));
        }
        warn!("{}. Ignoring.", issue);
        report.issues.push(issue);
        Ok(())
    }
}
