//! Person record (input row)
//!
//! Field names serialize with the column headers of the family CSV
//! (`ID`, `Name`, `MarriedTo`, ...) so a record round-trips to the same
//! shape a renderer reads back from a node's `data`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One genealogical record
///
/// Reference fields (`father_id`, `mother_id`, `spouse_id`) are `None` when
/// absent, never `Some("")`. Use [`PersonRecord::normalized`] on records that
/// did not come through the CSV loader.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Name", default)]
    pub name: String,

    /// Free-form; only `"F"` has a defined meaning
    #[serde(rename = "Gender", default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(rename = "Birth", default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<String>,

    #[serde(rename = "Death", default, skip_serializing_if = "Option::is_none")]
    pub death: Option<String>,

    /// Display text for tooltips
    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    #[serde(rename = "Father", default, skip_serializing_if = "Option::is_none")]
    pub father_id: Option<String>,

    #[serde(rename = "Mother", default, skip_serializing_if = "Option::is_none")]
    pub mother_id: Option<String>,

    #[serde(rename = "MarriedTo", default, skip_serializing_if = "Option::is_none")]
    pub spouse_id: Option<String>,
}

impl PersonRecord {
    /// Create a record with only an id (name defaults to the id)
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_father(mut self, father_id: impl Into<String>) -> Self {
        self.father_id = Some(father_id.into());
        self
    }

    pub fn with_mother(mut self, mother_id: impl Into<String>) -> Self {
        self.mother_id = Some(mother_id.into());
        self
    }

    pub fn with_spouse(mut self, spouse_id: impl Into<String>) -> Self {
        self.spouse_id = Some(spouse_id.into());
        self
    }

    pub fn with_dates(mut self, birth: impl Into<String>, death: impl Into<String>) -> Self {
        self.birth = Some(birth.into());
        self.death = Some(death.into());
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Trim every field and turn empty optional strings into `None`
    pub fn normalized(mut self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        self.id = self.id.trim().to_string();
        self.name = self.name.trim().to_string();
        self.gender = clean(self.gender);
        self.birth = clean(self.birth);
        self.death = clean(self.death);
        self.metadata = clean(self.metadata);
        self.father_id = clean(self.father_id);
        self.mother_id = clean(self.mother_id);
        self.spouse_id = clean(self.spouse_id);
        self
    }

    /// Reference held in `field`
    pub fn reference(&self, field: RecordField) -> Option<&str> {
        match field {
            RecordField::Father => self.father_id.as_deref(),
            RecordField::Mother => self.mother_id.as_deref(),
            RecordField::MarriedTo => self.spouse_id.as_deref(),
        }
    }

    /// Drop the reference held in `field`
    pub fn clear_reference(&mut self, field: RecordField) {
        match field {
            RecordField::Father => self.father_id = None,
            RecordField::Mother => self.mother_id = None,
            RecordField::MarriedTo => self.spouse_id = None,
        }
    }

    /// Iterate over present references as `(field, target id)`
    pub fn references(&self) -> impl Iterator<Item = (RecordField, &str)> {
        RecordField::ALL
            .into_iter()
            .filter_map(move |field| self.reference(field).map(|target| (field, target)))
    }
}

/// Reference-carrying columns of a [`PersonRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordField {
    Father,
    Mother,
    MarriedTo,
}

impl RecordField {
    pub const ALL: [RecordField; 3] = [
        RecordField::Father,
        RecordField::Mother,
        RecordField::MarriedTo,
    ];

    /// Column header name
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Father => "Father",
            RecordField::Mother => "Mother",
            RecordField::MarriedTo => "MarriedTo",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
