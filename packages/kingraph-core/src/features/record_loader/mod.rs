//! Record loader - CSV ingestion and reference cleanup
//!
//! The graph builder assumes unique ids and resolvable references. This
//! feature produces exactly that: rows are read, normalized, de-duplicated,
//! and every unresolved `Father`/`Mother`/`MarriedTo` is either nulled out
//! with a warning or, in strict mode, rejected.

mod csv_loader;
mod report;
mod sanitizer;

pub use csv_loader::CsvRecordLoader;
pub use report::{IssueKind, ReferenceIssue, SanitizeReport};
pub use sanitizer::{RecordSanitizer, SanitizeOutcome};
