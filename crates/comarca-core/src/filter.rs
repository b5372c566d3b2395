//! Field filters over the record set.
//!
//! Each set field of a [`FilterSelection`] must appear, normalized, as a
//! substring of the record's normalized field. Fields combine with AND and
//! the input order is kept.

use comarca_model::{Field, FilterSelection, Record};

use crate::dataset::NormalizedRecord;
use crate::normalize::normalize_text;

/// Normalized, non-empty constraints of a selection.
#[derive(Debug, Clone, Default)]
pub(crate) struct Criteria {
    terms: Vec<(Field, String)>,
}

impl Criteria {
    pub(crate) fn new(selection: &FilterSelection) -> Self {
        let terms = selection
            .iter()
            .map(|(field, value)| (field, normalize_text(value)))
            .filter(|(_, term)| !term.is_empty())
            .collect();
        Self { terms }
    }

    pub(crate) fn len(&self) -> usize {
        self.terms.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub(crate) fn accepts_normalized(&self, record: &NormalizedRecord) -> bool {
        self.terms
            .iter()
            .all(|(field, term)| record.field(*field).contains(term.as_str()))
    }

    /// Normalizes only the constrained fields of `record`.
    pub(crate) fn accepts(&self, record: &Record) -> bool {
        self.terms
            .iter()
            .all(|(field, term)| normalize_text(record.field(*field)).contains(term.as_str()))
    }
}

/// Records matching every set field of `selection`, in input order.
pub fn apply<'a>(records: &'a [Record], selection: &FilterSelection) -> Vec<&'a Record> {
    let criteria = Criteria::new(selection);
    if criteria.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| criteria.accepts(record))
        .collect()
}
