//! Interactive filter state: the current selection and the lists on offer.

use comarca_model::{CascadeOptions, DatasetStats, Field, FilterSelection, OptionSet, Record};

use crate::cascade::{cascade, comarca_options};
use crate::dataset::Dataset;
use crate::matcher::option_matches;
use crate::stats::summarize;

/// Selection state driven by dropdown events.
///
/// Changing `comarca` or `unidade` re-derives the dependent lists and drops
/// selections they no longer offer. `vara` and `codigo` are leaves and only
/// affect the result set.
#[derive(Debug, Clone)]
pub struct FilterSession {
    dataset: Dataset,
    selection: FilterSelection,
    comarcas: OptionSet,
    options: CascadeOptions,
}

impl FilterSession {
    pub fn new(dataset: Dataset) -> Self {
        let mut selection = FilterSelection::new();
        let comarcas = comarca_options(dataset.records());
        let update = cascade(dataset.records(), &mut selection);
        Self {
            dataset,
            selection,
            comarcas,
            options: update.options,
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Set one dropdown. A blank value clears it.
    ///
    /// Returns the dependent fields whose selection was reset.
    pub fn select(&mut self, field: Field, value: impl Into<String>) -> Vec<Field> {
        self.selection.set(field, value);
        if !field.drives_cascade() {
            return Vec::new();
        }
        let update = cascade(self.dataset.records(), &mut self.selection);
        self.options = update.options;
        for reset in &update.reset {
            tracing::info!(field = %reset, trigger = %field, "selection reset by cascade");
        }
        update.reset
    }

    /// Back to the unfiltered state with full option lists.
    pub fn clear(&mut self) {
        self.selection = FilterSelection::new();
        self.options = cascade(self.dataset.records(), &mut self.selection).options;
    }

    pub fn options(&self, field: Field) -> &OptionSet {
        self.options.get(field).unwrap_or(&self.comarcas)
    }

    /// Options of `field` whose text contains `term`, as a dropdown type-ahead shows them.
    pub fn search_options(&self, field: Field, term: &str) -> Vec<&str> {
        self.options(field)
            .iter()
            .map(String::as_str)
            .filter(|option| option_matches(option, term))
            .collect()
    }

    /// Records matching the current selection.
    pub fn results(&self) -> Vec<&Record> {
        self.dataset.apply(&self.selection)
    }

    pub fn stats(&self) -> DatasetStats {
        summarize(self.results())
    }
}
