//! Summary counts over a result set.

use std::collections::HashSet;

use comarca_model::{DatasetStats, Record};

/// Result count plus distinct comarcas and distinct unit identifiers.
pub fn summarize<'a, I>(records: I) -> DatasetStats
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut total_results = 0;
    let mut comarcas = HashSet::new();
    let mut unidades = HashSet::new();
    for record in records {
        total_results += 1;
        comarcas.insert(record.comarca.as_str());
        unidades.insert(record.unidade_id.as_str());
    }
    DatasetStats {
        total_results,
        comarcas: comarcas.len(),
        unidades: unidades.len(),
    }
}
