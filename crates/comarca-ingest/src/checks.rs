//! Consistency checks over a loaded dataset.
//!
//! Issues are advisory: the table still works with them, but a unit id that
//! points at two different units makes the unit count in the stats wrong.

use std::collections::HashMap;
use std::fmt;

use comarca_model::Record;

/// A consistency problem found in one row. Rows are 1-based data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    BlankField {
        row: usize,
        field: &'static str,
    },
    ConflictingUnit {
        row: usize,
        unidade_id: String,
        expected: (String, String),
        found: (String, String),
    },
}

impl DatasetIssue {
    pub fn row(&self) -> usize {
        match self {
            DatasetIssue::BlankField { row, .. } | DatasetIssue::ConflictingUnit { row, .. } => {
                *row
            }
        }
    }
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetIssue::BlankField { row, field } => {
                write!(f, "row {row}: {field} is blank")
            }
            DatasetIssue::ConflictingUnit {
                row,
                unidade_id,
                expected,
                found,
            } => write!(
                f,
                "row {row}: unidadeId {unidade_id} already names {} / {}, found {} / {}",
                expected.0, expected.1, found.0, found.1
            ),
        }
    }
}

/// Report blank required fields and unit ids paired with more than one unit.
pub fn check_dataset(records: &[Record]) -> Vec<DatasetIssue> {
    let mut issues = Vec::new();
    let mut units: HashMap<&str, (&str, &str)> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        for (field, value) in [
            ("comarca", &record.comarca),
            ("unidadeId", &record.unidade_id),
            ("unidade", &record.unidade),
            ("vara", &record.vara),
        ] {
            if value.trim().is_empty() {
                issues.push(DatasetIssue::BlankField { row, field });
            }
        }

        if record.unidade_id.trim().is_empty() {
            continue;
        }
        let pair = (record.comarca.as_str(), record.unidade.as_str());
        let expected = *units.entry(record.unidade_id.as_str()).or_insert(pair);
        if expected != pair {
            issues.push(DatasetIssue::ConflictingUnit {
                row,
                unidade_id: record.unidade_id.clone(),
                expected: (expected.0.to_string(), expected.1.to_string()),
                found: (pair.0.to_string(), pair.1.to_string()),
            });
        }
    }
    issues
}
