//! Counts shown above the results.

use serde::{Deserialize, Serialize};

/// Summary counts shown above the result table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub total_results: usize,
    /// Distinct comarca names.
    pub comarcas: usize,
    /// Distinct unit identifiers.
    pub unidades: usize,
}
