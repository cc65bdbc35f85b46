//! Shared models

mod record;

pub use record::{PersonRecord, RecordField};
