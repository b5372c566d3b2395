//! The immutable record set shared by every operation.

use std::sync::Arc;

use comarca_model::{Field, FilterSelection, Record};

use crate::filter::Criteria;
use crate::normalize::{normalize, normalize_text};

/// Normalized text of a record's filterable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub comarca: String,
    pub unidade: String,
    pub vara: String,
    pub codigo: String,
}

impl NormalizedRecord {
    pub fn from_record(record: &Record) -> Self {
        Self {
            comarca: normalize_text(&record.comarca),
            unidade: normalize_text(&record.unidade),
            vara: normalize_text(&record.vara),
            codigo: normalize(record.codigo.as_deref()),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Comarca => &self.comarca,
            Field::Unidade => &self.unidade,
            Field::Vara => &self.vara,
            Field::Codigo => &self.codigo,
        }
    }
}

/// Records loaded for the session, with their normalized forms memoized.
///
/// Cloning shares the underlying storage.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[Record]>,
    normalized: Arc<[NormalizedRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        let normalized: Vec<NormalizedRecord> =
            records.iter().map(NormalizedRecord::from_record).collect();
        Self {
            records: records.into(),
            normalized: normalized.into(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records paired with their normalized forms, in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&Record, &NormalizedRecord)> {
        self.records.iter().zip(self.normalized.iter())
    }

    /// Records matching `selection`, in load order.
    ///
    /// Same result as [`crate::filter::apply`], without re-normalizing.
    pub fn apply(&self, selection: &FilterSelection) -> Vec<&Record> {
        let criteria = Criteria::new(selection);
        let matched: Vec<&Record> = self
            .iter()
            .filter(|(_, normalized)| criteria.accepts_normalized(normalized))
            .map(|(record, _)| record)
            .collect();
        tracing::debug!(
            total = self.len(),
            matched = matched.len(),
            constraints = criteria.len(),
            "applied filters"
        );
        matched
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
