//! Dependent dropdown options.
//!
//! Option lists are derived with *exact* equality on upstream selections,
//! unlike [`crate::filter`], because their values come from the lists
//! themselves rather than from typed text.
//!
//! Dependency order is `comarca → unidade → {vara, codigo}`.

use comarca_model::{CascadeOptions, Field, FilterSelection, OptionSet, Record};

use crate::collation::{code_cmp, collate, distinct_sorted, numeric_leading_cmp};

/// Option sets after a cascade, plus the selections that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeUpdate {
    pub options: CascadeOptions,
    /// Fields whose previous value is no longer offered, in cascade order.
    pub reset: Vec<Field>,
}

/// Every comarca, collated.
pub fn comarca_options(records: &[Record]) -> OptionSet {
    distinct_sorted(records.iter().map(|record| record.comarca.as_str()), collate).into()
}

/// Units of the selected comarca, or of all comarcas.
pub fn unidade_options(records: &[Record], comarca: Option<&str>) -> OptionSet {
    distinct_sorted(
        records
            .iter()
            .filter(|record| within(record, comarca, None))
            .map(|record| record.unidade.as_str()),
        numeric_leading_cmp,
    )
    .into()
}

/// Varas under the selected comarca and unit.
pub fn vara_options(records: &[Record], comarca: Option<&str>, unidade: Option<&str>) -> OptionSet {
    distinct_sorted(
        records
            .iter()
            .filter(|record| within(record, comarca, unidade))
            .map(|record| record.vara.as_str()),
        numeric_leading_cmp,
    )
    .into()
}

/// PJE codes under the selected comarca and unit; records without a code are skipped.
pub fn codigo_options(
    records: &[Record],
    comarca: Option<&str>,
    unidade: Option<&str>,
) -> OptionSet {
    distinct_sorted(
        records
            .iter()
            .filter(|record| within(record, comarca, unidade))
            .filter_map(|record| record.codigo.as_deref())
            .filter(|code| !code.trim().is_empty()),
        code_cmp,
    )
    .into()
}

/// Option sets for the dependent fields, taking `selection` as given.
pub fn derive_options(records: &[Record], selection: &FilterSelection) -> CascadeOptions {
    let comarca = selection.get(Field::Comarca);
    let unidade = selection.get(Field::Unidade);
    CascadeOptions {
        unidade: unidade_options(records, comarca),
        vara: vara_options(records, comarca, unidade),
        codigo: codigo_options(records, comarca, unidade),
    }
}

/// Recompute dependent options after an upstream change and drop stale selections.
///
/// The unit is reconciled before varas and codes are derived, so a unit
/// that vanished with its comarca never narrows the lists below it.
pub fn cascade(records: &[Record], selection: &mut FilterSelection) -> CascadeUpdate {
    let mut reset = Vec::new();
    let comarca = selection.get(Field::Comarca).map(str::to_string);

    let unidade = unidade_options(records, comarca.as_deref());
    if reconcile(selection, Field::Unidade, &unidade) {
        reset.push(Field::Unidade);
    }

    let selected_unidade = selection.get(Field::Unidade);
    let vara = vara_options(records, comarca.as_deref(), selected_unidade);
    let codigo = codigo_options(records, comarca.as_deref(), selected_unidade);
    if reconcile(selection, Field::Vara, &vara) {
        reset.push(Field::Vara);
    }
    if reconcile(selection, Field::Codigo, &codigo) {
        reset.push(Field::Codigo);
    }

    tracing::debug!(
        comarca = comarca.as_deref().unwrap_or("*"),
        unidades = unidade.len(),
        varas = vara.len(),
        codigos = codigo.len(),
        reset = reset.len(),
        "cascaded options"
    );

    CascadeUpdate {
        options: CascadeOptions {
            unidade,
            vara,
            codigo,
        },
        reset,
    }
}

/// Keep `field`'s selection if `options` still offers it, else clear it.
///
/// Returns true when a selection was cleared.
pub fn reconcile(selection: &mut FilterSelection, field: Field, options: &OptionSet) -> bool {
    match selection.get(field) {
        Some(value) if !options.contains(value) => {
            tracing::debug!(%field, value, "selection no longer offered");
            selection.clear(field);
            true
        }
        _ => false,
    }
}

fn within(record: &Record, comarca: Option<&str>, unidade: Option<&str>) -> bool {
    comarca.is_none_or(|value| record.comarca == value)
        && unidade.is_none_or(|value| record.unidade == value)
}
