// Couple Registry - canonical couple identification
//
// Couples are keyed by CoupleKey, so a marriage stated from either partner's
// record (or both) registers exactly once. Registration order is kept for
// deterministic output.

use ahash::AHashMap;

use super::builder::GraphBuilderError;
use crate::features::graph_builder::domain::{Couple, CoupleKey};
use crate::shared::models::{PersonRecord, RecordField};

#[derive(Debug, Default)]
pub struct CoupleRegistry {
    couples: Vec<Couple>,
    by_key: AHashMap<CoupleKey, usize>,
}

impl CoupleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase 2: register a couple for every present spouse reference
    pub fn from_records(records: &[PersonRecord]) -> Result<Self, GraphBuilderError> {
        let mut registry = Self::new();
        for record in records {
            if let Some(spouse_id) = record.spouse_id.as_deref() {
                registry.register(&record.id, spouse_id).ok_or_else(|| {
                    GraphBuilderError::SelfReference {
                        record_id: record.id.clone(),
                        field: RecordField::MarriedTo,
                    }
                })?;
            }
        }
        Ok(registry)
    }

    /// Register the couple `(a, b)`; first occurrence wins
    ///
    /// Returns `None` only when `a == b`.
    pub fn register(&mut self, a: &str, b: &str) -> Option<&Couple> {
        let key = CoupleKey::new(a, b)?;
        let index = match self.by_key.get(&key) {
            Some(&index) => index,
            None => {
                let index = self.couples.len();
                self.by_key.insert(key.clone(), index);
                self.couples.push(Couple::new(key));
                index
            }
        };
        self.couples.get(index)
    }

    /// Couple registered for `(a, b)` in either order
    pub fn lookup(&self, a: &str, b: &str) -> Option<&Couple> {
        let key = CoupleKey::new(a, b)?;
        self.get(&key)
    }

    pub fn get(&self, key: &CoupleKey) -> Option<&Couple> {
        self.by_key.get(key).and_then(|&index| self.couples.get(index))
    }

    /// Couples in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Couple> {
        self.couples.iter()
    }

    pub fn len(&self) -> usize {
        self.couples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.couples.is_empty()
    }
}
